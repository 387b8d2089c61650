// Workspace list commands

use anyhow::Result;
use colored::Colorize;
use wsmgr_core::{ws_info, ws_println, ws_success};
use wsmgr_engine::RenumberReport;
use wsmgr_messages::{msg, MESSAGES};

use super::{check_index, Context};

pub fn handle_list(ctx: &Context) -> Result<()> {
    let manager = ctx.manager()?;
    if manager.is_empty() {
        ws_info!("{}", MESSAGES.list_empty);
        return Ok(());
    }

    let focused = manager.focused_index();
    ws_println!("{}", MESSAGES.list_header.dimmed());
    for (index, row) in manager.rows().iter().enumerate() {
        let num = if row.num < 0 {
            "-".to_string()
        } else {
            row.num.to_string()
        };
        if Some(index) == focused {
            ws_println!("{} {:>4}  {}", "*".green().bold(), num, row.name.bold());
        } else {
            ws_println!("  {:>4}  {}", num, row.name);
        }
    }
    Ok(())
}

pub fn handle_add(ctx: &Context, label: Option<&str>) -> Result<()> {
    let mut manager = ctx.manager()?;
    let name = manager.add_workspace(label)?;
    ws_success!("{}", msg!(MESSAGES.workspace_added, name = name));
    Ok(())
}

pub fn handle_activate(ctx: &Context, index: usize) -> Result<()> {
    let mut manager = ctx.manager()?;
    check_index(index, manager.len())?;
    manager.activate(index)?;
    let name = manager.rows()[index].name.clone();
    ws_success!("{}", msg!(MESSAGES.workspace_activated, name = name));
    Ok(())
}

pub fn handle_rename(ctx: &Context, index: usize, text: &str) -> Result<()> {
    let mut manager = ctx.manager()?;
    check_index(index, manager.len())?;
    let from = manager.rows()[index].name.clone();
    let to = manager.edit_label(index, text)?;
    ws_success!("{}", msg!(MESSAGES.workspace_renamed, from = from, to = to));
    Ok(())
}

pub fn handle_move(ctx: &Context, from: usize, to: usize) -> Result<()> {
    let mut manager = ctx.manager()?;
    check_index(from, manager.len())?;
    check_index(to, manager.len())?;
    let report = manager.move_row(from, to)?;
    print_report(&report);
    Ok(())
}

pub fn handle_renumber(ctx: &Context) -> Result<()> {
    let mut manager = ctx.manager()?;
    let report = manager.renumber()?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &RenumberReport) {
    if report.is_empty() {
        ws_info!("{}", MESSAGES.renumber_nothing);
        return;
    }
    for (from, to) in &report.renames {
        ws_println!("{}", msg!(MESSAGES.workspace_renamed, from = from.as_str(), to = to.as_str()));
    }
    ws_success!(
        "{}",
        msg!(MESSAGES.renumber_done, count = report.len().to_string())
    );
}
