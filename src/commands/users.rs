//! Users command - Login account provisioning.

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    match args.action {
        UsersAction::Create {
            username,
            password,
            authorities,
        } => {
            let account = services
                .users()
                .create_user(username, password, authorities)
                .await?;
            println!(
                "Created account '{}' with authorities: {}",
                account.username,
                account.authorities.join(", ")
            );
        }
    }

    Ok(())
}
