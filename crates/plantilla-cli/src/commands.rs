use anyhow::Context;
use plantilla_core::{Combinator, CompositeField, MultiFieldFilter};
use plantilla_render::{Article, PlayerTemplate};
use plantilla_view::{Alert, PlantillaView};

use crate::cli::Commands;

/// Result of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The article was updated.
    Shown,
    /// The gateway failed; the user was already alerted.
    Reported,
}

/// Dispatch a parsed command to the matching view entry point.
///
/// Argument errors (bad field names, unreadable template) are returned as
/// errors. Gateway failures have been alerted and logged by the view and
/// come back as [`Outcome::Reported`].
pub async fn dispatch<A: Article, N: Alert>(
    command: &Commands,
    view: &mut PlantillaView<A, N>,
) -> anyhow::Result<Outcome> {
    let result = match command {
        Commands::Home => view.process_home().await,
        Commands::About => view.process_about().await,
        Commands::List => view.show_all_players().await,
        Commands::Names => view.show_names_only().await,
        Commands::Alphabetical => view.show_alphabetically().await,
        Commands::SortBy(args) => view.show_by_field(args.field).await,
        Commands::SortByComposite(args) => {
            let field = CompositeField::parse(&args.field, &args.subfield)?;
            view.show_by_composite_field(field).await
        }
        Commands::SortByNumeric(args) => view.show_by_numeric_field(args.field).await,
        Commands::Show(args) => view.show_one_player(&args.id).await,
        Commands::ByName(args) => view.show_by_name(&args.name).await,
        Commands::ByMultiple(args) => {
            let filter = MultiFieldFilter {
                nombre: args.nombre.clone(),
                localidad: args.localidad.clone(),
                participaciones: args.participaciones.clone(),
                lateralidad: args.lateralidad.clone(),
            };
            let combinator = if args.any {
                Combinator::Any
            } else {
                Combinator::All
            };
            view.show_by_multiple(&filter, combinator).await
        }
        Commands::Template(args) => {
            let body = std::fs::read_to_string(&args.path)
                .with_context(|| format!("failed to read template {}", args.path.display()))?;
            view.show_with_template(&PlayerTemplate::new(body)).await
        }
    };

    Ok(match result {
        Ok(()) => Outcome::Shown,
        Err(_) => Outcome::Reported,
    })
}
