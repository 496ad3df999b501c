use clap::Parser;
use miette::{Context, IntoDiagnostic};
use skylabel::moderation::{
    GlobalLabelStrings, Label, LabelContext, LabelerDefs, LabelerView, ServicesResponse,
};
use skylabel::{Did, Language};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve moderation labels into definitions and display strings")]
struct Args {
    /// JSON file of labeler definitions: a getServices response, or an object
    /// mapping labeler DIDs to arrays of label value definitions
    #[arg(short, long)]
    defs: Option<PathBuf>,

    /// getServices response to join labeler profiles from (defaults to --defs if it is one)
    #[arg(long)]
    labelers: Option<PathBuf>,

    /// JSON object of strings for the global label values (defaults to built-in English)
    #[arg(long)]
    strings: Option<PathBuf>,

    /// Locale to resolve strings in
    #[arg(short, long, env = "SKYLABEL_LOCALE", default_value = "en")]
    locale: Language,

    /// DID of the labeler that applied the labels
    #[arg(short, long)]
    source: Did,

    /// Label values to resolve
    #[arg(required = true)]
    values: Vec<String>,
}

fn read(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Labeler profiles from a definitions file, if it is a getServices response
///
/// A plain definitions map has no views, so failing to decode one is logged and
/// yields no profiles.
fn views_in(json: &str) -> Vec<LabelerView> {
    match serde_json::from_str::<ServicesResponse>(json) {
        Ok(response) => response.views,
        Err(e) => {
            tracing::debug!(error = %e, "definitions file has no labeler views");
            Vec::new()
        }
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(EnvFilter::from_env("SKYLABEL_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let defs_json = args.defs.as_deref().map(read).transpose()?;
    let defs = match &defs_json {
        Some(json) => LabelerDefs::from_json(json)?,
        None => LabelerDefs::new(),
    };

    let labelers = match (&args.labelers, &defs_json) {
        (Some(path), _) => {
            let response: ServicesResponse = serde_json::from_str(&read(path)?)
                .into_diagnostic()
                .wrap_err("labelers file is not a getServices response")?;
            response.views
        }
        (None, Some(json)) => views_in(json),
        (None, None) => Vec::new(),
    };

    let global_strings = match &args.strings {
        Some(path) => serde_json::from_str::<GlobalLabelStrings>(&read(path)?)
            .into_diagnostic()
            .wrap_err("invalid global strings file")?,
        None => GlobalLabelStrings::english(),
    };

    tracing::info!(
        labelers = defs.len(),
        profiles = labelers.len(),
        locale = %args.locale,
        "resolving {} labels",
        args.values.len()
    );

    let ctx = LabelContext::new()
        .locale(args.locale)
        .global_strings(global_strings)
        .defs(defs)
        .labelers(labelers)
        .build();

    let labels: Vec<Label> = args
        .values
        .into_iter()
        .map(|val| {
            Label::new()
                .src(args.source.clone())
                .uri(args.source.as_str())
                .val(val)
                .build()
        })
        .collect();

    for info in ctx.label_infos(&labels) {
        println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_from_services_response() {
        let views = views_in(include_str!("moderation/labeler_services.json"));
        assert!(!views.is_empty());
        assert_eq!(
            views[0].creator.did.as_str(),
            "did:plc:ar7c4by46qjdydhdevvrndac"
        );
    }

    #[test]
    fn no_views_from_plain_map_or_corrupt_services() {
        assert!(views_in(r#"{ "did:plc:labeler": [] }"#).is_empty());
        assert!(views_in(r#"{ "views": [{ "uri": 42 }] }"#).is_empty());
    }
}
