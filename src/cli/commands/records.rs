//! Generic CRUD commands, one implementation for every entity.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tabled::Table;

use crate::cli::commands::views::Listing;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::apply_table_style;
use crate::db::{DataService, Record};
use crate::remote::RemoteClient;

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

fn render_many<E: Listing>(items: &[E], format: &str) -> CliResult<String> {
    match format {
        "json" => to_json(items),
        _ => {
            if items.is_empty() {
                return Ok(format!("No {} records found.", E::NAME));
            }
            let mut table = Table::new(items.iter().map(E::view));
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}

fn render_one<E: Listing>(item: &E, format: &str) -> CliResult<String> {
    match format {
        "json" => to_json(item),
        _ => {
            let mut table = Table::new([item.view()]);
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}

fn parse_data<T: DeserializeOwned>(data: &str) -> CliResult<T> {
    serde_json::from_str(data).map_err(|e| CliError::InvalidData {
        message: e.to_string(),
    })
}

/// List all records, newest first
pub async fn list<E: Listing, C: RemoteClient>(
    service: &DataService<C>,
    format: &str,
) -> CliResult<String> {
    let items = service.repository::<E>().list().await?;
    render_many(&items, format)
}

/// Show one record by ID
pub async fn get<E: Listing, C: RemoteClient>(
    service: &DataService<C>,
    id: &str,
    format: &str,
) -> CliResult<String> {
    let item = service.repository::<E>().get(id).await?;
    render_one(&item, format)
}

/// Create a record from a camelCase JSON draft
pub async fn create<E: Listing, C: RemoteClient>(
    service: &DataService<C>,
    data: &str,
    format: &str,
) -> CliResult<String> {
    let draft: E::New = parse_data(data)?;
    let item = service.repository::<E>().create(&draft).await?;
    match format {
        "json" => to_json(&item),
        _ => Ok(format!("Created {} {}", E::NAME, item.id())),
    }
}

/// Apply a camelCase JSON patch to a record
pub async fn update<E: Listing, C: RemoteClient>(
    service: &DataService<C>,
    id: &str,
    data: &str,
    format: &str,
) -> CliResult<String> {
    let patch: E::Patch = parse_data(data)?;
    let item = service.repository::<E>().update(id, &patch).await?;
    match format {
        "json" => to_json(&item),
        _ => Ok(format!("Updated {} {}", E::NAME, item.id())),
    }
}

/// Delete a record; requires `force`
pub async fn delete<E: Listing, C: RemoteClient>(
    service: &DataService<C>,
    id: &str,
    force: bool,
) -> CliResult<String> {
    if !force {
        return Err(CliError::DeleteNotConfirmed {
            entity: E::NAME,
            id: id.to_string(),
        });
    }
    service.repository::<E>().delete(id).await?;
    Ok(format!("Deleted {} {}", E::NAME, id))
}

/// Show the business profile
pub async fn profile<C: RemoteClient>(
    service: &DataService<C>,
    format: &str,
) -> CliResult<String> {
    match service.profile().await? {
        Some(profile) => render_one(&profile, format),
        None => Ok("No profile found.".to_string()),
    }
}

/// Apply a camelCase JSON patch to the business profile
pub async fn update_profile<C: RemoteClient>(
    service: &DataService<C>,
    data: &str,
    format: &str,
) -> CliResult<String> {
    let patch = parse_data(data)?;
    let profile = service.update_profile(&patch).await?;
    match format {
        "json" => to_json(&profile),
        _ => Ok(format!("Updated profile {}", profile.id)),
    }
}
