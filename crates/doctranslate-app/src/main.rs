// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DocTranslate — upload, translate, edit, download
//
// Entry point. Initialises logging, loads the stored configuration, and
// drives one document through the workflow, printing the final text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use doctranslate_app::services::{config_store, data_dir};
use doctranslate_app::{TranslationService, Workflow};
use doctranslate_core::error::DocTranslateError;
use doctranslate_core::format::human_size;
use doctranslate_core::human_errors::humanize_error;
use doctranslate_core::languages;
use doctranslate_core::Stage;
use doctranslate_document::upload::is_accepted_file_name;
use doctranslate_document::{FileSelection, UploadedFile};
use tracing::{info, warn};

fn cli() -> Command {
    Command::new("doctranslate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate a document and print the result")
        .arg(
            Arg::new("file")
                .help("Document to translate (.pdf .jpg .jpeg .png .txt .docx)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Source language code (default: stored setting, usually auto)"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target language code (default: stored setting, usually en)"),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .help("Skip ahead: 'edit' skips translation, 'download' skips translation and editing")
                .value_parser(["edit", "download"]),
        )
        .arg(
            Arg::new("no-delay")
                .long("no-delay")
                .help("Disable the simulated processing delay")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let dir = data_dir::data_dir();
    let mut config = config_store::load_config(&dir);
    if matches.get_flag("no-delay") {
        config.translation_delay_ms = 0;
        config.extraction_delay_ms = 0;
    }
    info!(path = %dir.display(), "DocTranslate starting");

    let mut workflow = Workflow::new(&config);
    if let Some(from) = matches.get_one::<String>("from") {
        if !languages::is_known(from) {
            warn!(code = %from, "unknown source language, passing through");
        }
        workflow.set_source_language(from.as_str());
    }
    if let Some(to) = matches.get_one::<String>("to") {
        if let Err(e) = workflow.set_target_language(to.as_str()) {
            return report(&e);
        }
    }

    let Some(path) = matches.get_one::<PathBuf>("file") else {
        return ExitCode::FAILURE;
    };
    let file = match UploadedFile::from_selection(FileSelection::Browsed {
        path: path.clone(),
        declared_kind: None,
    })
    .await
    {
        Ok(file) => file,
        Err(e) => return report(&e),
    };
    if !is_accepted_file_name(file.name()) {
        warn!(file = %file.name(), "file type is not in the accepted list, continuing anyway");
    }
    info!(file = %file.name(), size = %human_size(file.byte_size()), "document selected");

    workflow.upload(file);
    let shortcuts = workflow.dispatcher();

    match matches.get_one::<String>("skip").map(String::as_str) {
        Some("edit") => shortcuts.skip_to_edit(),
        Some("download") => {
            workflow.proceed();
            shortcuts.skip_to_download();
        }
        _ => {
            workflow.proceed();
            if let Err(e) = translate(&mut workflow, &TranslationService::simulated(&config)).await
            {
                return report(&e);
            }
        }
    }
    workflow.drain_shortcuts();

    while workflow.stage() != Stage::Download && workflow.proceed() {}

    let snapshot = workflow.download_snapshot();
    let formats: Vec<&str> = snapshot.formats().iter().map(|f| f.label()).collect();
    info!(
        target_lang = %snapshot.target_lang,
        formats = %formats.join(", "),
        "ready to download"
    );
    println!("{}", snapshot.text);
    ExitCode::SUCCESS
}

async fn translate(
    workflow: &mut Workflow,
    service: &TranslationService,
) -> Result<(), DocTranslateError> {
    let request = workflow.begin_translation()?;
    let outcome = service.run(&request).await;
    workflow.finish_translation(&request, &outcome.session);
    match outcome.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn report(err: &DocTranslateError) -> ExitCode {
    eprintln!("{}", humanize_error(err).display_text());
    ExitCode::FAILURE
}
