//! Bookmark commands: list, add, remove, copy, open

use colored::Colorize;

use crate::controller::BookmarkListController;
use crate::interfaces::cli::CliError;
use crate::structs::Bookmark;
use crate::utils::{CARD_MAX_WORDS, truncate_words};

pub async fn list_bookmarks(
    controller: &BookmarkListController,
    search: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    controller.refresh().await?;
    if let Some(text) = search {
        controller.set_search(text);
    }
    let view = controller.view();

    if json {
        let output = serde_json::to_string_pretty(&view.bookmarks)
            .map_err(|e| CliError::CommandError(format!("Failed to encode JSON: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if view.bookmarks.is_empty() {
        if view.is_filtered() {
            println!(
                "{} No bookmarks match \"{}\"",
                "ℹ".bold().blue(),
                view.search
            );
        } else {
            println!("{} No bookmarks found", "ℹ".bold().blue());
        }
        return Ok(());
    }

    println!("{}", "Bookmarks:".bold().green());
    println!();
    for bookmark in &view.bookmarks {
        println!("  {}", format_line(bookmark));
        if !bookmark.description.is_empty() {
            println!(
                "      {}",
                truncate_words(&bookmark.description, CARD_MAX_WORDS).dimmed()
            );
        }
    }
    println!();
    if view.is_filtered() {
        println!(
            "{} Showing {} of {} bookmarks",
            "ℹ".bold().blue(),
            view.bookmarks.len().to_string().green(),
            view.total
        );
    } else {
        println!(
            "{} Total {} bookmarks",
            "ℹ".bold().blue(),
            view.total.to_string().green()
        );
    }
    Ok(())
}

fn format_line(bookmark: &Bookmark) -> String {
    format!(
        "{} {} -> {}",
        format!("#{}", bookmark.id).cyan(),
        truncate_words(bookmark.display_title(), CARD_MAX_WORDS).bold(),
        bookmark.url.blue().underline()
    )
}

pub async fn add_bookmark(controller: &BookmarkListController, url: &str) -> Result<(), CliError> {
    controller.create(url).await?;
    println!(
        "  {} {}",
        "Total bookmarks:".dimmed(),
        controller.bookmarks().len()
    );
    Ok(())
}

pub async fn remove_bookmark(controller: &BookmarkListController, id: i64) -> Result<(), CliError> {
    controller.remove(id).await?;
    Ok(())
}

pub async fn copy_bookmark(controller: &BookmarkListController, id: i64) -> Result<(), CliError> {
    let bookmark = lookup(controller, id).await?;
    controller.copy_link(&bookmark.url)?;
    Ok(())
}

pub async fn open_bookmark(controller: &BookmarkListController, id: i64) -> Result<(), CliError> {
    let bookmark = lookup(controller, id).await?;
    controller.open_link(&bookmark.url)?;
    println!("{} Opened {}", "✓".bold().green(), bookmark.url.blue());
    Ok(())
}

async fn lookup(controller: &BookmarkListController, id: i64) -> Result<Bookmark, CliError> {
    controller.refresh().await?;
    controller
        .find(id)
        .ok_or_else(|| CliError::CommandError(format!("Bookmark {} not found", id)))
}
