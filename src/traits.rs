//! Seams between the view core and whatever draws the map.

use std::sync::mpsc::Sender;

use crate::compose::FitCommand;

/// A rendering surface that can be told to fit its viewport.
///
/// Fit commands are fire-and-forget: nothing is acknowledged, and a later
/// command supersedes an earlier one.
pub trait MapSurface {
    fn fit_bounds(&mut self, command: &FitCommand);
}

/// Forwards fit commands over a channel to a render thread.
///
/// A hung-up receiver means nobody is drawing; the command is dropped.
impl MapSurface for Sender<FitCommand> {
    fn fit_bounds(&mut self, command: &FitCommand) {
        let _ = self.send(*command);
    }
}
