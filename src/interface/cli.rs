// Command-line seeding: list every entry or add a single one.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::application::usecases::create_person::{CreatePersonCommand, CreatePersonUseCase};
use crate::application::usecases::list_persons::ListPersonsUseCase;
use clap::Parser;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "phonebook-seed")]
#[command(about = "List phonebook entries, or add one when a name and number are given")]
pub struct SeedArgs {
    /// Database password; replaces the password of the configured connection string.
    pub credential: String,
    /// Name of the person to add.
    #[arg(requires = "number")]
    pub name: Option<String>,
    /// Phone number of the person to add.
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedCommand {
    List,
    Add { name: String, number: String },
}

impl SeedArgs {
    pub fn command(&self) -> SeedCommand {
        match (&self.name, &self.number) {
            (Some(name), Some(number)) => SeedCommand::Add {
                name: name.clone(),
                number: number.clone(),
            },
            _ => SeedCommand::List,
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Person(#[from] PersonUseCaseError),
    #[error("write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Run one seeding command, writing its report lines to `out`.
pub async fn run_seed(
    ctx: &AppContext,
    command: SeedCommand,
    out: &mut impl Write,
) -> Result<(), SeedError> {
    match command {
        SeedCommand::List => {
            for person in ListPersonsUseCase::execute(ctx).await? {
                writeln!(out, "{} {}", person.name, person.number)?;
            }
        }
        SeedCommand::Add { name, number } => {
            let person = CreatePersonUseCase::execute(
                ctx,
                CreatePersonCommand {
                    name: Some(name),
                    number: Some(number),
                },
            )
            .await?;
            writeln!(out, "added {} number {} to phonebook", person.name, person.number)?;
        }
    }
    Ok(())
}
