use std::io::{self, Write};
use std::path::Path;

use burrow_engine::{OpKind, StatusEvent, StatusSink};
use burrow_fs::{DirectoryItem, FileItem, Realization};

/// Trait for writing status messages (operation outcomes, warnings).
pub trait StatusWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()>;
}

/// Default status writer that outputs to stderr.
pub struct StderrWriter;

impl StatusWriter for StderrWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        eprintln!("{}", msg);
        Ok(())
    }
}

/// Buffering status writer for testing.
#[derive(Default)]
pub struct BufferedWriter {
    buf: Vec<String>,
}

impl BufferedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.buf
    }
}

impl StatusWriter for BufferedWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        self.buf.push(msg.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Forwards explorer status events to a [`StatusWriter`].
pub struct StatusPrinter<S: StatusWriter> {
    format: OutputFormat,
    /// Also print successful drive and directory loads.
    show_loads: bool,
    pub writer: S,
}

impl<S: StatusWriter> StatusPrinter<S> {
    pub fn new(format: OutputFormat, writer: S) -> Self {
        Self {
            format,
            show_loads: false,
            writer,
        }
    }

    pub fn with_loads(mut self, show_loads: bool) -> Self {
        self.show_loads = show_loads;
        self
    }
}

impl<S: StatusWriter> StatusSink for StatusPrinter<S> {
    fn report(&mut self, event: &StatusEvent) {
        let is_load = matches!(event.op, OpKind::LoadDrives | OpKind::LoadDirectory);
        if is_load && event.is_success() && !self.show_loads {
            return;
        }

        let line = match self.format {
            OutputFormat::Human => event.to_string(),
            OutputFormat::Json => match serde_json::to_value(event) {
                Ok(ev) => serde_json::json!({ "type": "status", "event": ev }).to_string(),
                Err(_) => event.to_string(),
            },
        };
        let _ = self.writer.write_status(&line);
    }
}

/// Static context about one listing.
#[derive(Debug)]
pub struct ListingContext<'a> {
    /// Label for this listing (`ls`, `drives`, ...)
    pub kind: &'a str,
    /// Directory being listed, if any.
    pub dir: Option<&'a Path>,
    /// Number of entries in the listing.
    pub total: usize,
}

/// Trait for printing flat listings.
pub trait ListingPrinter {
    fn begin(&mut self, ctx: &ListingContext) -> io::Result<()>;

    fn print_item(&mut self, item: &FileItem, ctx: &ListingContext) -> io::Result<()>;

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()>;

    /// Prints a directory tree, descending only into loaded children.
    fn print_tree(&mut self, roots: &[DirectoryItem]) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write> {
    out: W,
    use_color: bool,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        // Generic writers cannot be probed for a TTY, so Auto means no color.
        let use_color = cfg.color == ColorChoice::Always;
        Self { out, use_color }
    }

    /// Create a printer that writes to stdout with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            use_color,
        }
    }

    #[inline]
    fn format_name(&self, name: &str, is_dir: bool) -> String {
        match (self.use_color, is_dir) {
            (true, true) => format!("\x1b[1;34m{}/\x1b[0m", name),
            (false, true) => format!("{}/", name),
            _ => name.to_owned(),
        }
    }

    fn write_node(&mut self, node: &DirectoryItem, prefix: &str, last: bool) -> io::Result<()> {
        let branch = if last { "└── " } else { "├── " };
        let marker = match node.realization() {
            Realization::Unrealized => " …",
            _ => "",
        };
        let name = self.format_name(&node.name, true);
        writeln!(self.out, "{prefix}{branch}{name}{marker}")?;

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.write_node(child, &child_prefix, i + 1 == count)?;
        }
        Ok(())
    }
}

impl<W: Write> ListingPrinter for HumanPrinter<W> {
    fn begin(&mut self, ctx: &ListingContext) -> io::Result<()> {
        if let Some(dir) = ctx.dir {
            writeln!(self.out, "{}:", dir.display())?;
        }
        Ok(())
    }

    fn print_item(&mut self, item: &FileItem, _ctx: &ListingContext) -> io::Result<()> {
        let modified = item
            .last_modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let name = self.format_name(&item.name, item.is_dir);
        writeln!(
            self.out,
            "{:>10}  {:<16}  {}",
            item.display_size(),
            modified,
            name
        )
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        writeln!(self.out, "{} items", ctx.total)
    }

    fn print_tree(&mut self, roots: &[DirectoryItem]) -> io::Result<()> {
        for root in roots {
            writeln!(self.out, "{}", root.name)?;
            let count = root.children.len();
            for (i, child) in root.children.iter().enumerate() {
                self.write_node(child, "", i + 1 == count)?;
            }
        }
        Ok(())
    }
}

pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Create a printer that writes to stdout.
    pub fn stdout() -> JsonPrinter<io::Stdout> {
        JsonPrinter { out: io::stdout() }
    }
}

impl<W: Write> ListingPrinter for JsonPrinter<W> {
    fn begin(&mut self, _ctx: &ListingContext) -> io::Result<()> {
        Ok(())
    }

    fn print_item(&mut self, item: &FileItem, ctx: &ListingContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "name": item.name,
            "path": item.full_path.to_string_lossy(),
            "is_dir": item.is_dir,
            "size": item.size,
            "display_size": item.display_size(),
            "extension": item.extension(),
            "modified": item.last_modified,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "summary",
            "kind": ctx.kind,
            "dir": ctx.dir.map(|d| d.to_string_lossy()),
            "total": ctx.total,
        });
        writeln!(self.out, "{}", obj)
    }

    fn print_tree(&mut self, roots: &[DirectoryItem]) -> io::Result<()> {
        for root in roots {
            let line = serde_json::to_string(root).map_err(io::Error::other)?;
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl PrinterConfig {
    /// Create a stdout printer for this configuration.
    pub fn make_printer(&self) -> Box<dyn ListingPrinter> {
        match self.format {
            OutputFormat::Human => Box::new(HumanPrinter::<io::Stdout>::stdout(*self)),
            OutputFormat::Json => Box::new(JsonPrinter::<io::Stdout>::stdout()),
        }
    }
}

/// Prints `items` between `begin` and `finish`.
pub fn print_listing(
    printer: &mut dyn ListingPrinter,
    kind: &str,
    dir: Option<&Path>,
    items: &[FileItem],
) -> io::Result<()> {
    let ctx = ListingContext {
        kind,
        dir,
        total: items.len(),
    };
    printer.begin(&ctx)?;
    for item in items {
        printer.print_item(item, &ctx)?;
    }
    printer.finish(&ctx)
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
