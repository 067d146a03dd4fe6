//! PackIT CLI
//!
//! Creates and maintains packing lists stored in SQLite. Weather for new
//! lists comes from Open-Meteo.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{
    AddPackingItem, AddPackingItemHandler, ApplicationError, CommandHandler, CreatePackingListWithItems,
    CreatePackingListWithItemsHandler, GetPackingList, GetPackingListHandler,
    LocalizationWriteModel, PackItem, PackItemHandler, PackingListDto, PackingListReadService,
    PackingListRepository, QueryHandler, RemovePackingItem, RemovePackingItemHandler,
    RemovePackingList, RemovePackingListHandler, SearchPackingLists, SearchPackingListsHandler,
    WeatherService,
};
use clap::Parser;
use domain::{DefaultPackingListFactory, PackingListId};
use infrastructure::{
    AppConfig, SqlitePackingListReadService, SqlitePackingListRepository, WeatherAdapter,
    create_pool, init_logging,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cli::{Cli, Commands};

/// Ports wired for one invocation
struct App {
    repository: Arc<dyn PackingListRepository>,
    read_service: Arc<dyn PackingListReadService>,
    weather: Arc<dyn WeatherService>,
    config: AppConfig,
    json: bool,
}

impl App {
    fn new(config: AppConfig, json: bool) -> anyhow::Result<Self> {
        let pool = Arc::new(
            create_pool(&config.database)
                .with_context(|| format!("Failed to open database '{}'", config.database.path))?,
        );
        let weather = WeatherAdapter::with_config(config.weather.clone(), config.retry.clone())?;

        Ok(Self {
            repository: Arc::new(SqlitePackingListRepository::new(Arc::clone(&pool))),
            read_service: Arc::new(SqlitePackingListReadService::new(pool)),
            weather: Arc::new(weather),
            config,
            json,
        })
    }

    async fn run(&self, command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::Create {
                name,
                days,
                gender,
                city,
                country,
                id,
            } => {
                let id = id.unwrap_or_else(Uuid::new_v4);
                let localization = city
                    .zip(country)
                    .map(|(city, country)| LocalizationWriteModel::new(city, country));

                CreatePackingListWithItemsHandler::new(
                    Arc::clone(&self.repository),
                    Arc::new(DefaultPackingListFactory::new()),
                    Arc::clone(&self.read_service),
                    Arc::clone(&self.weather),
                )
                .with_weather_timeout(self.config.handler.weather_timeout())
                .handle(CreatePackingListWithItems {
                    id,
                    name,
                    days,
                    gender,
                    localization,
                })
                .await?;

                info!(list_id = %id, "Packing list created");
                self.show(id).await
            },

            Commands::Show { id } => self.show(id).await,

            Commands::Search { name } => {
                let lists = SearchPackingListsHandler::new(Arc::clone(&self.read_service))
                    .handle(SearchPackingLists { name })
                    .await?;
                debug!(count = lists.len(), "Search finished");

                if self.json {
                    println!("{}", serde_json::to_string_pretty(&lists)?);
                } else if lists.is_empty() {
                    println!("No packing lists found");
                } else {
                    for list in &lists {
                        println!("{}", output::render_summary(list));
                    }
                }
                Ok(())
            },

            Commands::AddItem {
                list_id,
                name,
                quantity,
            } => {
                AddPackingItemHandler::new(Arc::clone(&self.repository))
                    .handle(AddPackingItem {
                        list_id,
                        name,
                        quantity,
                    })
                    .await?;
                self.show(list_id).await
            },

            Commands::Pack { list_id, name } => {
                PackItemHandler::new(Arc::clone(&self.repository))
                    .handle(PackItem { list_id, name })
                    .await?;
                self.show(list_id).await
            },

            Commands::RemoveItem { list_id, name } => {
                RemovePackingItemHandler::new(Arc::clone(&self.repository))
                    .handle(RemovePackingItem { list_id, name })
                    .await?;
                self.show(list_id).await
            },

            Commands::Remove { id } => {
                RemovePackingListHandler::new(Arc::clone(&self.repository))
                    .handle(RemovePackingList { id })
                    .await?;
                if self.json {
                    println!("{}", serde_json::json!({ "removed": id }));
                } else {
                    println!("Removed packing list {id}");
                }
                Ok(())
            },
        }
    }

    async fn show(&self, id: Uuid) -> anyhow::Result<()> {
        let Some(list) = GetPackingListHandler::new(Arc::clone(&self.read_service))
            .handle(GetPackingList { id })
            .await?
        else {
            let id = PackingListId::from_uuid(id).map_err(ApplicationError::from)?;
            return Err(ApplicationError::PackingListNotFound { id }.into());
        };
        self.print_list(&list)
    }

    fn print_list(&self, list: &PackingListDto) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(list)?);
        } else {
            println!("{}", output::render_list(list));
        }
        Ok(())
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    if let Some(path) = &cli.database {
        config.database.path.clone_from(path);
    }
    Ok(config)
}

/// Exit status for a failed invocation
///
/// Errors the caller can fix by changing the request exit with 2, the same
/// status clap uses for bad arguments. Everything else exits with 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ApplicationError>() {
        Some(app_err) if app_err.is_user_error() => 2,
        _ => 1,
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_logging(&config.logging, cli.verbose)?;
    debug!(environment = %config.environment, database = %config.database.path, "Configuration loaded");

    App::new(config, cli.json)?.run(cli.command).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_status(&err))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_exit_with_two() {
        let err = anyhow::Error::new(ApplicationError::PackingListAlreadyExists {
            name: "Rome".into(),
        });
        assert_eq!(exit_status(&err), 2);

        let err = anyhow::Error::new(ApplicationError::PackingListNotFound {
            id: PackingListId::new(),
        });
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn context_does_not_hide_user_errors() {
        let err = anyhow::Error::new(ApplicationError::MissingLocalizationWeather {
            localization: "Nowhere, Nowhere".into(),
        })
        .context("create failed");
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = anyhow::Error::new(ApplicationError::ExternalService("down".into()));
        assert_eq!(exit_status(&err), 1);

        let err = anyhow::anyhow!("Failed to open database");
        assert_eq!(exit_status(&err), 1);
    }
}
