use clap::Parser;
use exec::ProcessLauncher;
use std::path::PathBuf;
use strokecore::library::GestureAction;
use workflow::config::WorkflowConfig;
use workflow::runner::Session;

mod capture;
mod exec;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline mouse-gesture trainer and matcher")]
struct Args {
    /// Recognize a stroke trace against the library and run its action
    #[arg(long)]
    recognize: Option<PathBuf>,
    /// Add a stroke trace to the library as a new gesture
    #[arg(long)]
    define: Option<PathBuf>,
    /// Name for a newly defined gesture
    #[arg(long)]
    name: Option<String>,
    /// Executable launched when the defined gesture later matches
    #[arg(long)]
    action_path: Option<String>,
    /// Arguments passed to the launched executable
    #[arg(long)]
    action_args: Option<String>,
    /// Working directory for the launched executable
    #[arg(long)]
    action_start_in: Option<String>,
    /// Print the stored gestures
    #[arg(long, default_value_t = false)]
    list: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 32)]
    resample_points: usize,
    #[arg(long, default_value_t = 0.15)]
    match_threshold: f64,
    #[arg(long, default_value_t = 0.08)]
    duplicate_threshold: f64,
    /// Gesture library file
    #[arg(long, default_value = "gestures.json")]
    library: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.resample_points,
            args.match_threshold,
            args.duplicate_threshold,
            args.library.clone(),
        )
    };

    if let Some(trace) = &args.define {
        let points = capture::read_trace(trace)?;
        let mut session = Session::open(config)?;
        let action = GestureAction::new(
            args.action_path.unwrap_or_default(),
            args.action_args.unwrap_or_default(),
            args.action_start_in.unwrap_or_default(),
        );
        if session.run_define(points, args.name.unwrap_or_default(), action)? {
            println!(
                "Gesture defined ({} in library).",
                session.recognizer().store().count()
            );
        } else {
            println!("Rejected: too similar to an existing gesture.");
        }
    } else if let Some(trace) = &args.recognize {
        let points = capture::read_trace(trace)?;
        let session = Session::open(config)?;
        let outcome = session.run_match(points, &ProcessLauncher)?;
        match (outcome.matched, outcome.description) {
            (true, Some(name)) => println!("Matched \"{}\" (score {:.4}).", name, outcome.score),
            (false, Some(name)) => println!(
                "No match: best candidate \"{}\" scored {:.4}.",
                name, outcome.score
            ),
            _ => println!("No match: the library is empty."),
        }
    } else if args.list {
        let session = Session::open(config)?;
        for (index, gesture) in session.recognizer().store().iter().enumerate() {
            let name = if gesture.description.is_empty() {
                "(unnamed)"
            } else {
                &gesture.description
            };
            println!(
                "{:3}  {}  {} point(s)  action={}",
                index,
                name,
                gesture.points().len(),
                if gesture.action.is_empty() {
                    "-"
                } else {
                    &gesture.action.path
                }
            );
        }
    } else {
        println!("Nothing to do; pass --recognize, --define, or --list.");
    }

    Ok(())
}
