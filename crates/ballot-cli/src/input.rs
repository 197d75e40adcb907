//! Line input.
//!
//! Turns lines from a reader into events on the shared queue. End of input
//! counts as `/quit`. Reading happens on a dedicated thread doing blocking
//! I/O: a read pending on stdin cannot be cancelled, and the process does not
//! wait for that thread when the runtime exits for any reason.

use std::{
    io::{self, BufRead},
    thread::{self, JoinHandle},
};

use ballot_app::{AppEvent, HostHandle};
use tracing::warn;

use crate::commands::{self, Command};

/// Forward parsed lines from `reader` until end of input, `/quit`, or until
/// the runtime goes away.
pub fn forward_lines<R: BufRead>(reader: R, host: &HostHandle) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "reading input failed");
                break;
            },
        };

        let command = commands::parse(&line);
        let quitting = command == Command::Quit;
        match &command {
            Command::Unknown { input } => warn!(input, "unknown command"),
            Command::InvalidArgs { command, error } => warn!(command, error, "invalid command"),
            _ => {},
        }

        if let Some(event) = command.into_event()
            && !host.send(event)
        {
            return;
        }
        if quitting {
            return;
        }
    }

    host.send(AppEvent::Quit);
}

/// Run [`forward_lines`] on a named background thread.
pub fn spawn_reader<R>(reader: R, host: HostHandle) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new().name("ballot-input".into()).spawn(move || forward_lines(reader, &host))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ballot_app::channel::event_queue;

    use super::*;

    #[test]
    fn lines_become_events_and_eof_quits() {
        let (host, mut queue) = event_queue();
        let input: &[u8] = b"Rust\n/bogus\n/vote\n\n/refresh\n";

        forward_lines(input, &host);

        assert_eq!(
            queue.drain(),
            vec![AppEvent::toggle("Rust"), AppEvent::Submit, AppEvent::Refresh, AppEvent::Quit]
        );
    }

    #[test]
    fn quit_stops_reading() {
        let (host, mut queue) = event_queue();
        let input: &[u8] = b"/q\nGo\n";

        forward_lines(input, &host);

        assert_eq!(queue.drain(), vec![AppEvent::Quit]);
    }

    #[test]
    fn stops_once_the_runtime_is_gone() {
        let (host, queue) = event_queue();
        drop(queue);
        let mut input = Cursor::new("Go\nRust\nGo\n");

        forward_lines(&mut input, &host);

        assert_eq!(input.position(), 3);
    }

    #[test]
    fn reader_thread_feeds_the_queue() {
        let (host, mut queue) = event_queue();

        let reader = spawn_reader(Cursor::new(b"Go\n/vote\n".to_vec()), host).unwrap();
        reader.join().unwrap();

        assert_eq!(queue.drain(), vec![AppEvent::toggle("Go"), AppEvent::Submit, AppEvent::Quit]);
    }
}
