use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use health_manager::app::AppState;
use health_manager::config::ClientOptions;
use health_manager::day_view::DayView;
use health_manager::error::Error;
use health_manager::form::{FormErrors, SnackbarMessage};
use health_manager::model::DayDate;
use health_manager::signup_form::SignupForm;
use health_manager::HealthManager;

#[derive(Parser, Debug)]
#[clap(name = "health-manager", version)]
#[clap(about = "Food diary client for the Health Manager API", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// API base URL. Falls back to HEALTH_MANAGER_API_URL.
    #[clap(long)]
    api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an account
    Signup {
        #[clap(long)]
        email: String,
        #[clap(long)]
        first_name: String,
        #[clap(long)]
        last_name: String,
        #[clap(long)]
        password: String,
    },
    /// Sign in and keep the token in the session file
    Signin {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Search the food catalog
    Foods { query: String },
    /// Work with the entries of one day (YYYY-MM-DD, defaults to today)
    Day {
        #[clap(long)]
        date: Option<DayDate>,
        #[clap(subcommand)]
        action: DayAction,
    },
}

#[derive(Subcommand, Debug)]
enum DayAction {
    /// List entries and the nutrition summary
    List,
    /// Add an entry for the first (or `--pick`th) food matching `--food`
    Add {
        #[clap(long)]
        food: String,
        #[clap(long, default_value = "0")]
        pick: usize,
        #[clap(long)]
        quantity: String,
    },
    /// Change the quantity of an entry
    Edit {
        id: i64,
        #[clap(long)]
        quantity: String,
    },
    /// Delete an entry after confirmation
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[clap(long)]
        yes: bool,
    },
}

fn print_message(message: &SnackbarMessage) {
    if let Some(text) = message.visible_text() {
        println!("[{:?}] {}", message.severity, text);
    }
}

fn print_errors(errors: &FormErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{}: {}", field, message);
    }
}

fn print_day(view: &DayView) {
    let entries = view.entries();
    println!("Entries for {}", entries.date());
    for item in entries.entries() {
        println!(
            "  #{:<5} {:<30} {:>5} g {:>6} kcal",
            item.id,
            item.name,
            item.quantity,
            item.energy()
        );
    }

    let summary = view.summary();
    println!("Total kilocalories: {} kcals ({}%)", summary.total_kcal, summary.progress_percent);
}

fn confirm(prompt: &str) -> Result<bool, Error> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

async fn run_day(client: &HealthManager, date: DayDate, action: DayAction) -> Result<(), Error> {
    let mut view = DayView::open(date, client.options().daily_kcal_goal, client).await;
    print_message(view.entries().message());

    match action {
        DayAction::List => {}
        DayAction::Add { food, pick, quantity } => {
            view.open_create();
            view.search_food(client, &food).await;

            let candidate = view.form().candidates().get(pick).cloned();
            if candidate.is_none() {
                eprintln!("No food matches {:?}", food);
            }
            view.form_mut().select_food(candidate.as_ref());
            view.form_mut().set_quantity(&quantity);

            view.submit_entry(client).await;
            print_errors(view.form().errors());
            print_message(view.form().message());
        }
        DayAction::Edit { id, quantity } => {
            let item = view
                .find(id)
                .cloned()
                .ok_or_else(|| Error::general(format!("No entry {} on {}", id, date)))?;

            view.open_edit(&item);
            view.form_mut().set_quantity(&quantity);

            view.submit_entry(client).await;
            print_errors(view.form().errors());
            print_message(view.form().message());
        }
        DayAction::Delete { id, yes } => {
            let item = view
                .find(id)
                .cloned()
                .ok_or_else(|| Error::general(format!("No entry {} on {}", id, date)))?;

            view.request_delete(&item);
            if yes || confirm(&format!("Delete {} ({} g)?", item.name, item.quantity))? {
                view.confirm_delete(client).await;
                print_message(view.entries().message());
            } else {
                view.close_delete_dialog();
            }
        }
    }

    print_day(&view);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let mut options = ClientOptions::from_env()?;
    if let Some(url) = &cli.api_url {
        options = options.with_api_url(url);
    }
    if options.session_path.is_none() {
        options = options.with_session_path(Some(".health-manager-session.json".into()));
    }

    let client = HealthManager::new_with_options(options)?;
    let mut state = AppState::new();

    match cli.command {
        Commands::Signup { email, first_name, last_name, password } => {
            let mut form = SignupForm::new();
            form.change_email(&email);
            form.change_first_name(&first_name);
            form.change_last_name(&last_name);
            form.change_password(&password);

            form.submit(&client).await;
            print_errors(form.errors());
            print_message(form.message());
        }
        Commands::Signin { email, password } => {
            if state.sign_in(&client, &email, &password).await {
                if let Some(user) = state.current_user() {
                    println!("Signed in as {} {}", user.first_name, user.last_name);
                }
            }
            print_message(state.message());
        }
        Commands::Logout => {
            state.logout(&client)?;
            println!("Signed out");
        }
        Commands::Whoami => {
            state.restore(&client).await;
            match state.current_user() {
                Some(user) => println!("{} {} <{}>", user.first_name, user.last_name, user.email),
                None => println!("Not signed in"),
            }
        }
        Commands::Foods { query } => {
            for food in client.foods().search(&query).await? {
                println!("  #{:<5} {:<30} {}", food.id, food.name, food.caption());
            }
        }
        Commands::Day { date, action } => {
            let date = date.unwrap_or_else(DayDate::today);
            run_day(&client, date, action).await?;
        }
    }

    Ok(())
}
