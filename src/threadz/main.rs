use clap::Parser;
use std::path::PathBuf;
use threadz::api::ConfigAction;
use threadz::error::Result;
use threadz::init::{initialize, ThreadzContext, HOME_ENV};

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_config, print_full_comments, print_messages, print_thread};

fn main() {
    let cli = Cli::parse();
    let _logger = cli::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let home = cli
        .home
        .or_else(|| std::env::var_os(HOME_ENV).map(PathBuf::from));
    let mut ctx = initialize(home)?;

    match cli.command {
        Some(Commands::Post { text }) => handle_post(&mut ctx, text),
        Some(Commands::Reply { id, text }) => handle_reply(&mut ctx, id, text),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Star { ids }) => handle_star(&mut ctx, ids),
        Some(Commands::List {
            starred,
            timestamps,
            no_timestamps,
        }) => {
            let show = (ctx.config.show_timestamps || timestamps) && !no_timestamps;
            handle_list(&ctx, starred, show)
        }
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => {
            let show = ctx.config.show_timestamps;
            handle_list(&ctx, false, show)
        }
    }
}

fn handle_post(ctx: &mut ThreadzContext, text: Vec<String>) -> Result<()> {
    let result = ctx.api.post_comment(&text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reply(ctx: &mut ThreadzContext, id: String, text: Vec<String>) -> Result<()> {
    let result = ctx.api.post_reply(&id, &text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut ThreadzContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_comments(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_star(ctx: &mut ThreadzContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_stars(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &ThreadzContext, starred: bool, show_timestamps: bool) -> Result<()> {
    let result = ctx.api.list_comments(starred)?;
    print_thread(&result.listed_comments, show_timestamps);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &ThreadzContext, id: String) -> Result<()> {
    let result = ctx.api.view_comment(&id)?;
    print_full_comments(&result.listed_comments);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &ThreadzContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &ThreadzContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
