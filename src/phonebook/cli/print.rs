use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel, PageView};
use phonebook::model::Record;
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Phonebook Menu ===".bold())?;
    writeln!(out, "1. Display Entries")?;
    writeln!(out, "2. Add Entry")?;
    writeln!(out, "3. Search Entries")?;
    writeln!(out, "4. Exit")
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_page<W: Write>(out: &mut W, view: &PageView) -> io::Result<()> {
    writeln!(out)?;
    let heading = format!(
        "___ Phonebook Entries - Page {} of {} ___",
        view.page, view.total_pages
    );
    writeln!(out, "{}", heading.bold())?;
    for record in &view.records {
        writeln!(out, "Name: {}", record.full_name())?;
        writeln!(out, "Company: {}", record.organization)?;
        writeln!(out, "Work Phone: {}", record.work_phone)?;
        writeln!(out, "Personal Phone: {}", record.personal_phone)?;
        writeln!(out, "{}", "_".repeat(RULE_WIDTH))?;
    }
    writeln!(out, "Page {} of {}", view.page, view.total_pages)
}

pub(super) fn print_found<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "___ Found Entries ___".bold())?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, record.full_name())?;
        writeln!(out, "    company: {}", record.organization)?;
        writeln!(
            out,
            "    work phone: {}, personal phone: {}",
            record.work_phone, record.personal_phone
        )?;
    }
    Ok(())
}
