//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_event::LogEvent;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

pub trait Sink: Debug + Send + Sync {
    /**
        Writes a fully formatted event.

        Errors are reported to the [`Logger`](crate::Logger), which discards them;
        logging never fails the caller.
    */
    fn write(&self, event: &LogEvent) -> std::io::Result<()>;

    /**
    Writes a fully formatted event asynchronously.

    This allows sinks to reuse an async context that already exists.
    The default is a wrapper around [Self::write].
    */
    fn write_async<'s>(
        &'s self,
        event: LogEvent,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<()>> + Send + 's>> {
        Box::pin(async move { self.write(&event) })
    }

    /**
    The application may imminently exit.  Flush anything buffered.
    */
    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }
}

/*
Boilerplate notes.

# Sink

Clone doesn't make sense for sinks that own a device handle, so it's not a supertrait.
PartialEq/Eq/Hash: unclear whether we'd mean data or provenance equality, so no.
Default: who knows how a sink is constructed (a path, a socket...).
Send/Sync: loggers are shared across threads, so sinks must be too.
*/
