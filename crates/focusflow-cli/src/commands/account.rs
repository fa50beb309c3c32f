//! Account and session commands.

use clap::Subcommand;
use focusflow_core::auth::AccountStore;
use focusflow_core::Store;

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account and open a session
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (at least 8 characters)
        #[arg(long)]
        password: String,
    },
    /// Authenticate and open a session
    Login {
        /// Email address
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Close the active session; account and task data stays persisted
    Logout,
    /// Show the active session user
    Whoami,
}

pub fn run(action: AccountAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let accounts = AccountStore::new(&store);

    match action {
        AccountAction::Signup {
            name,
            email,
            password,
        } => {
            let user = super::block_on(accounts.register(&name, &email, &password))??;
            println!("Signed up as {} <{}>", user.name, user.email);
            println!("id: {}", user.id);
        }
        AccountAction::Login { email, password } => {
            let user = super::block_on(accounts.authenticate(&email, &password))??;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        AccountAction::Logout => {
            accounts.end_session()?;
            println!("Logged out");
        }
        AccountAction::Whoami => match accounts.current_session()? {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!("id: {}", user.id);
                println!("since: {}", user.created_at.to_rfc3339());
            }
            None => println!("Not logged in"),
        },
    }
    Ok(())
}
