//! Print the ontology metadata declared on model fields.
//!
//! Runs all five annotation queries for every field of the selected classes
//! and prints the results as JSON, the same view an ontology generator works
//! from. Reads the built-in play-by-play model unless a field table is given
//! with `--table` or `PBPRDF_FIELD_TABLE`.

use anyhow::{Result, anyhow, bail};
use pbprdf_ontology::config::FIELD_TABLE_ENV;
use pbprdf_ontology::logging::init_logging;
use pbprdf_ontology::{
    FieldMetadata, FieldRegistry, InspectConfig, ModelClass, builtin_registry, describe,
    split_list,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = InspectConfig::from_env();
    let args = CliArgs::parse(env::args_os().skip(1), &config)?;
    init_logging(&args.log_filter)?;

    let registry = match &args.table {
        Some(path) => {
            info!(path = %path.display(), "reading field table");
            match &args.schema {
                Some(schema) => FieldRegistry::load_with_schema(path, schema)?,
                None => FieldRegistry::load(path)?,
            }
        }
        None => builtin_registry(),
    };

    let reports = build_reports(&registry, &args.classes)?;
    debug!(classes = reports.len(), "collected field metadata");

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct ClassReport<'a> {
    class: &'a str,
    fields: Vec<FieldMetadata<'a>>,
}

fn build_reports<'a>(
    registry: &'a FieldRegistry,
    only: &[String],
) -> Result<Vec<ClassReport<'a>>> {
    let selected: Vec<&ModelClass> = if only.is_empty() {
        registry.classes().collect()
    } else {
        let mut seen = BTreeSet::new();
        only.iter()
            .filter(|&name| seen.insert(name.as_str()))
            .map(|name| {
                registry
                    .class(name)
                    .ok_or_else(|| anyhow!("unknown model class '{name}'"))
            })
            .collect::<Result<_>>()?
    };

    Ok(selected
        .into_iter()
        .map(|class| ClassReport {
            class: class.name(),
            fields: class.fields().iter().map(describe).collect(),
        })
        .collect())
}

#[derive(Debug)]
struct CliArgs {
    table: Option<PathBuf>,
    schema: Option<PathBuf>,
    classes: Vec<String>,
    pretty: bool,
    log_filter: String,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = OsString>, config: &InspectConfig) -> Result<Self> {
        let mut args = args.into_iter();
        let mut table: Option<PathBuf> = None;
        let mut schema: Option<PathBuf> = None;
        let mut classes: Vec<String> = Vec::new();
        let mut pretty = false;
        let mut log_filter: Option<String> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--table" => {
                    if table.is_some() {
                        bail!("--table may only be provided once");
                    }
                    table = Some(PathBuf::from(next_value(&mut args, "--table")?));
                }
                "--schema" => {
                    if schema.is_some() {
                        bail!("--schema may only be provided once");
                    }
                    schema = Some(PathBuf::from(next_value(&mut args, "--schema")?));
                }
                "--class" => {
                    let raw = next_value(&mut args, "--class")?;
                    classes.extend(split_list(&raw));
                }
                "--pretty" => pretty = true,
                "--log" => log_filter = Some(next_value(&mut args, "--log")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let table = table.or_else(|| config.field_table.clone());
        if schema.is_some() && table.is_none() {
            bail!("--schema requires a field table (--table or {FIELD_TABLE_ENV})");
        }
        if classes.is_empty() {
            classes = config.classes.clone();
        }

        Ok(CliArgs {
            table,
            schema,
            classes,
            pretty,
            log_filter: log_filter.unwrap_or_else(|| config.log_filter.clone()),
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: field-metadata [--table PATH [--schema PATH]] [--class NAME[,NAME...]]... [--pretty] [--log FILTER]\n\
Prints class, subclass, property, object-property and comment metadata for every field as JSON.\n\
Environment: PBPRDF_FIELD_TABLE, PBPRDF_CLASSES, PBPRDF_LOG (flags take precedence).\n"
}

fn print_usage() {
    print!("{}", usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn flags_override_environment() {
        let config = InspectConfig {
            field_table: Some(PathBuf::from("/env/table.json")),
            classes: vec!["Team".to_string()],
            log_filter: "info".to_string(),
        };
        let args = CliArgs::parse(
            os_args(&["--table", "/flag/table.json", "--class", "Game,Shot", "--log", "debug"]),
            &config,
        )
        .unwrap();
        assert_eq!(args.table, Some(PathBuf::from("/flag/table.json")));
        assert_eq!(args.classes, vec!["Game", "Shot"]);
        assert_eq!(args.log_filter, "debug");
        assert!(!args.pretty);
    }

    #[test]
    fn environment_fills_missing_flags() {
        let config = InspectConfig {
            field_table: Some(PathBuf::from("/env/table.json")),
            classes: vec!["Team".to_string()],
            log_filter: "info".to_string(),
        };
        let args = CliArgs::parse(os_args(&["--pretty"]), &config).unwrap();
        assert_eq!(args.table, Some(PathBuf::from("/env/table.json")));
        assert_eq!(args.classes, vec!["Team"]);
        assert_eq!(args.log_filter, "info");
        assert!(args.pretty);
    }

    #[test]
    fn rejects_unknown_flags_and_dangling_values() {
        let config = InspectConfig::default();
        assert!(CliArgs::parse(os_args(&["--verbose"]), &config).is_err());
        assert!(CliArgs::parse(os_args(&["--class"]), &config).is_err());
        assert!(CliArgs::parse(os_args(&["--schema", "s.json"]), &config).is_err());
    }

    #[test]
    fn repeated_schema_and_classes() {
        let config = InspectConfig::default();
        let err = CliArgs::parse(
            os_args(&["--table", "t.json", "--schema", "a.json", "--schema", "b.json"]),
            &config,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--schema may only be provided once"));

        let args = CliArgs::parse(
            os_args(&["--class", "Game,Shot", "--class", "Game", "--class", "Team,Shot"]),
            &config,
        )
        .unwrap();
        let registry = builtin_registry();
        let reports = build_reports(&registry, &args.classes).unwrap();
        let names: Vec<&str> = reports.iter().map(|report| report.class).collect();
        assert_eq!(names, vec!["Game", "Shot", "Team"]);
    }

    #[test]
    fn reports_follow_requested_classes() {
        let registry = builtin_registry();
        let reports = build_reports(&registry, &["Shot".to_string(), "Game".to_string()]).unwrap();
        let names: Vec<&str> = reports.iter().map(|report| report.class).collect();
        assert_eq!(names, vec!["Shot", "Game"]);
        assert!(build_reports(&registry, &["Dunk".to_string()]).is_err());
        assert_eq!(build_reports(&registry, &[]).unwrap().len(), registry.len());
    }
}
