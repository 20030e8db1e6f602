//! cellfind - search highlighting and go-to-definition for notebook cells

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cellfind::cli::{CliArgs, Command, GotoArgs, HighlightArgs};
use cellfind::config::EditorConfig;
use cellfind::messages::{EditorMsg, Msg, SearchMsg};
use cellfind::model::{AppModel, Selection};
use cellfind::render::render_visible;
use cellfind::search::{SearchQuery, SearchSpec};
use cellfind::syntax::LanguageId;
use cellfind::update::update;

fn main() -> Result<()> {
    cellfind::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    match args.command {
        Command::Highlight(h) => run_highlight(config, &h),
        Command::Goto(g) => run_goto(config, &g),
    }
}

fn load_model(mut config: EditorConfig, notebook: &Path) -> Result<AppModel> {
    let source = std::fs::read_to_string(notebook)
        .with_context(|| format!("Failed to read notebook {}", notebook.display()))?;

    // The file extension wins over the configured default language
    let detected = LanguageId::from_path(notebook);
    if detected != LanguageId::PlainText {
        config.default_language = detected;
    }

    let mut model = AppModel::new(config);
    model.load_notebook(&source);
    tracing::info!(
        "Loaded {} {} cells from {}",
        model.notebook.len(),
        model.config.default_language.display_name(),
        notebook.display()
    );
    Ok(model)
}

fn run_highlight(mut config: EditorConfig, args: &HighlightArgs) -> Result<()> {
    if let Some(lines) = args.lines {
        config.visible_lines = lines;
    }
    let params = args.find_params(&config.find);
    let query = SearchQuery::build(SearchSpec::from(&params));
    if let Some(error) = query.error() {
        bail!("Invalid search pattern: {}", error);
    }

    let mut model = load_model(config, &args.notebook)?;
    model.find_replace = params;

    let ids: Vec<_> = model.notebook.editors().map(|e| e.id).collect();
    if let Some(top) = args.top_line() {
        for &id in &ids {
            update(&mut model, Msg::Editor(id, EditorMsg::ScrollTo(top)));
        }
    }

    update(&mut model, Msg::Search(SearchMsg::Broadcast));

    if args.select_first {
        for &id in &ids {
            let first = model
                .notebook
                .editor(id)
                .and_then(|e| e.decorations().iter().next().copied());
            if let Some(deco) = first {
                let selection = Selection::new(deco.from, deco.to);
                update(
                    &mut model,
                    Msg::Editor(id, EditorMsg::SetSelections(vec![selection])),
                );
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, editor) in model.notebook.editors().enumerate() {
        let suffix = if editor.read_only { " (read-only)" } else { "" };
        writeln!(
            out,
            "=== cell {}{} ({} matches) ===",
            index + 1,
            suffix,
            editor.decorations().len()
        )?;
        write!(out, "{}", render_visible(editor))?;
    }
    Ok(())
}

fn run_goto(config: EditorConfig, args: &GotoArgs) -> Result<()> {
    let mut model = load_model(config, &args.notebook)?;

    let target = model
        .notebook
        .editors()
        .find(|e| e.find_definition(&args.name).is_some())
        .map(|e| e.id);
    let Some(id) = target else {
        bail!("No definition of `{}` found", args.name);
    };

    update(
        &mut model,
        Msg::Editor(id, EditorMsg::GoToDefinition(args.name.clone())),
    );

    let index = model.notebook.index_of(id).context("Cell disappeared")?;
    let editor = model.notebook.editor(id).context("Cell disappeared")?;
    let (line, column) = editor
        .document()
        .offset_to_position(editor.selection().head);
    println!(
        "cell {}, line {}, column {}",
        index + 1,
        line + 1,
        column + 1
    );
    Ok(())
}
