use crate::reports;
use clap::Args;
use formcheck::analyzer::profile;
use formcheck::Activity;

#[derive(Args, Debug, Clone)]
pub struct ProfilesArgs {
    /// Only show this activity
    #[arg(short, long)]
    pub activity: Option<Activity>,
}

pub fn run(args: ProfilesArgs) {
    println!("\n📋 === FORM PROFILES === 📋");
    for activity in Activity::all() {
        if let Some(filter) = args.activity {
            if filter != activity {
                continue;
            }
        }
        reports::print_profile(profile(activity));
    }
}
