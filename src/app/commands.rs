use tracing::warn;

use shopfinder::messages::Command;

use crate::App;

impl App {
    /// Execute side effects requested by the reducer
    pub(crate) fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Fetch(request) => {
                    if self.fetch_tx.send(request).is_err() {
                        warn!(seq = request.seq, "fetch service is gone; request dropped");
                    }
                }
                Command::OpenLink(link) => self.open_link(&link),
                Command::CopyLink(link) => self.copy_link(&link),
            }
        }
    }
}
