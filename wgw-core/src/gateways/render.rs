use crate::render::RenderCommand;

/// Executes render commands, e.g. on a leaflet map.
pub trait MapRenderer {
    fn render(&mut self, cmd: RenderCommand);
}

/// Records all commands.
impl MapRenderer for Vec<RenderCommand> {
    fn render(&mut self, cmd: RenderCommand) {
        self.push(cmd);
    }
}
