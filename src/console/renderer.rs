use crate::adapters::json::to_json;
use std::{
    fmt,
    io::{self, Write},
};
use wgw_core::{
    gateways::render::MapRenderer,
    render::{InfoPanel, LineStyle, RenderCommand, TileLayer},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Prints render commands instead of drawing them.
pub struct ConsoleRenderer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleRenderer<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Console feedback that is not a render command.
    pub fn message(&mut self, msg: impl fmt::Display) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{msg}"),
            OutputFormat::Json => {
                let msg = serde_json::json!({ "message": msg.to_string() });
                writeln!(self.out, "{msg}")
            }
        }
    }

    fn write(&mut self, cmd: RenderCommand) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => write_text(&mut self.out, &cmd),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &to_json::render_command(cmd))?;
                writeln!(self.out)
            }
        }
    }
}

impl<W: Write> MapRenderer for ConsoleRenderer<W> {
    fn render(&mut self, cmd: RenderCommand) {
        if let Err(err) = self.write(cmd) {
            log::warn!("Unable to print render command: {err}");
        }
    }
}

fn write_text<W: Write>(out: &mut W, cmd: &RenderCommand) -> io::Result<()> {
    match cmd {
        RenderCommand::AddTileLayer(TileLayer {
            url_template,
            attribution,
        }) => writeln!(out, "tiles       {url_template} ({attribution})"),
        RenderCommand::SetView { center, zoom } => {
            writeln!(out, "view        {center} zoom {zoom}")
        }
        RenderCommand::AddMarker { layer, pos, popup } => match popup {
            Some(popup) => writeln!(out, "marker {layer} {pos} \"{popup}\""),
            None => writeln!(out, "marker {layer} {pos}"),
        },
        RenderCommand::AddPolyline {
            layer,
            points: [from, to],
            style: LineStyle { color, weight },
        } => writeln!(out, "route {layer} {from} -> {to} ({color}, {weight}px)"),
        RenderCommand::RemoveLayer(layer) => writeln!(out, "remove {layer}"),
        RenderCommand::InvalidateSize => writeln!(out, "invalidate size"),
        RenderCommand::ShowSuggestions(names) => {
            writeln!(out, "suggestions")?;
            for (i, name) in names.iter().enumerate() {
                writeln!(out, "  {}. {name}", i + 1)?;
            }
            Ok(())
        }
        RenderCommand::HideSuggestions => writeln!(out, "suggestions hidden"),
        RenderCommand::ShowInfoPanel(InfoPanel {
            title,
            address,
            distance,
        }) => {
            writeln!(out, "info        {title}")?;
            writeln!(out, "            {address}")?;
            writeln!(out, "            Distance: {distance}")
        }
    }
}
