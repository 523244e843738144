//! Interactive session: stdin lines become filter changes.

use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;

use shelfview_catalog::Catalog;
use shelfview_events::{EventEnvelope, ProjectionRunner, Subscription};
use shelfview_table::render::{LineKind, render_table};
use shelfview_table::{FilterController, FilterEvent, FilterState, ProductTableProjection};

use crate::config::OutputFormat;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Replace the filter text (any line that is not a command).
    FilterText(String),
    /// `:stock` flips the in-stock-only toggle.
    ToggleInStock,
    /// `:reset` restores the default filter.
    Reset,
    /// `:quit` / `:q` ends the session.
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":stock" => Input::ToggleInStock,
            ":reset" => Input::Reset,
            ":quit" | ":q" => Input::Quit,
            _ => Input::FilterText(line.to_string()),
        }
    }
}

/// Controller plus one subscribed table view.
pub struct Session {
    controller: FilterController,
    subscription: Subscription<EventEnvelope<FilterEvent>>,
    view: ProjectionRunner<ProductTableProjection>,
}

impl Session {
    /// Start a session; the initial filter is applied through the controller
    /// so the view receives it like any other change.
    pub fn new(catalog: Catalog, initial: FilterState) -> anyhow::Result<Self> {
        let mut controller = FilterController::new();
        let subscription = controller.subscribe();

        if initial.filter_text != controller.state().filter_text {
            controller.set_filter_text(initial.filter_text);
        }
        if initial.in_stock_only != controller.state().in_stock_only {
            controller.set_in_stock_only(initial.in_stock_only);
        }

        let mut session = Self {
            controller,
            subscription,
            view: ProjectionRunner::new(ProductTableProjection::new(catalog)),
        };
        session.sync()?;

        Ok(session)
    }

    pub fn filter(&self) -> &FilterState {
        self.controller.state()
    }

    pub fn view(&self) -> &ProductTableProjection {
        self.view.projection()
    }

    /// Apply one input. Returns `false` when the session should end.
    pub fn handle(&mut self, input: Input) -> anyhow::Result<bool> {
        match input {
            Input::FilterText(text) => {
                self.controller.set_filter_text(text);
            }
            Input::ToggleInStock => {
                let flag = !self.controller.state().in_stock_only;
                self.controller.set_in_stock_only(flag);
            }
            Input::Reset => {
                self.controller.reset();
            }
            Input::Quit => return Ok(false),
        }
        self.sync()?;
        Ok(true)
    }

    /// Read lines from `input` until EOF or `:quit`, reprinting after each.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if !self.handle(Input::parse(&line))? {
                break;
            }
            writeln!(out)?;
            self.render(out, format)?;
        }
        Ok(())
    }

    /// Write the current rows.
    pub fn render<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        let rows = self.view.projection().rows();
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, rows)?;
                writeln!(out)?;
            }
            OutputFormat::Table { color } => {
                for line in render_table(rows).lines() {
                    if !color {
                        writeln!(out, "{}", line.text)?;
                        continue;
                    }
                    match line.kind {
                        LineKind::ColumnHeader => writeln!(out, "{}", line.text.bold().underline())?,
                        LineKind::Category => writeln!(out, "{}", line.text.bold())?,
                        LineKind::Product { stocked: false } => writeln!(out, "{}", line.text.red())?,
                        LineKind::Product { stocked: true } => writeln!(out, "{}", line.text)?,
                    }
                }
            }
        }
        Ok(())
    }

    fn sync(&mut self) -> anyhow::Result<()> {
        let applied = self
            .view
            .drain(&self.subscription)
            .context("table view fell out of sequence")?;
        tracing::debug!(applied, "table view synced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const PLAIN: OutputFormat = OutputFormat::Table { color: false };

    fn render_plain(session: &Session) -> String {
        let mut out = Vec::new();
        session.render(&mut out, PLAIN).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_text() {
        assert_eq!(Input::parse(":stock"), Input::ToggleInStock);
        assert_eq!(Input::parse(" :reset \n"), Input::Reset);
        assert_eq!(Input::parse(":q"), Input::Quit);
        assert_eq!(Input::parse("Pea\n"), Input::FilterText("Pea".to_string()));
        assert_eq!(Input::parse(""), Input::FilterText(String::new()));
    }

    #[test]
    fn initial_filter_reaches_the_view() {
        let session = Session::new(Catalog::sample(), FilterState::new("pea", false)).unwrap();

        assert_eq!(session.view().filter(), &FilterState::new("pea", false));
        assert_eq!(render_plain(&session), "Name  Price\nVegetables\nPeas  $1\n");
    }

    #[test]
    fn inputs_drive_the_table() {
        let mut session = Session::new(Catalog::sample(), FilterState::default()).unwrap();

        assert!(session.handle(Input::ToggleInStock).unwrap());
        assert_eq!(session.view().visible_products(), 4);

        assert!(session.handle(Input::FilterText("zzz".to_string())).unwrap());
        assert!(session.view().rows().is_empty());

        assert!(session.handle(Input::Reset).unwrap());
        assert_eq!(session.filter(), &FilterState::default());
        assert_eq!(session.view().visible_products(), 6);

        assert!(!session.handle(Input::Quit).unwrap());
    }

    #[test]
    fn run_stops_at_quit_and_reprints_each_change() {
        let mut session = Session::new(Catalog::sample(), FilterState::default()).unwrap();
        let input = Cursor::new("pump\n:stock\n:quit\nignored\n");
        let mut out = Vec::new();

        session.run(input, &mut out, PLAIN).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\nName     Price\nVegetables\nPumpkin  $4\n\nName  Price\n");
        assert_eq!(session.filter(), &FilterState::new("pump", true));
    }

    #[test]
    fn json_output_lists_rows() {
        let session = Session::new(Catalog::sample(), FilterState::new("apple", false)).unwrap();
        let mut out = Vec::new();
        session.render(&mut out, OutputFormat::Json).unwrap();

        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows[0]["kind"], "category_header");
        assert_eq!(rows[1]["product"]["name"], "Apple");
    }
}
