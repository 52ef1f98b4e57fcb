//! Connection Handler
//!
//! Services a single client connection: one request, one response, close.

use std::io::ErrorKind;
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, WeatherError};
use crate::protocol::{read_request, write_response};
use crate::weather::{Handler, ValueSource};

/// Handles a single client connection
pub struct Connection<S> {
    /// TCP stream, closed when the connection is dropped
    stream: TcpStream,

    /// Shared request handler
    handler: Arc<Handler<S>>,

    /// Peer address for logging
    peer_addr: String,
}

impl<S: ValueSource> Connection<S> {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, handler: Arc<Handler<S>>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm, the response is a single small record
        stream.set_nodelay(true)?;

        Ok(Self {
            stream,
            handler,
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 leaves the socket blocking)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.stream
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.stream
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the exchange (blocking)
    ///
    /// A peer that disconnects before sending a full request, or before the
    /// response is written, is not an error: the connection is just dropped.
    pub fn handle(mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let request = match read_request(&mut self.stream) {
            Ok(request) => request,
            Err(WeatherError::Io(ref e)) if is_disconnect(e.kind()) => {
                tracing::debug!(
                    "Client {} closed the connection before a full request: {}",
                    self.peer_addr,
                    e
                );
                return Ok(());
            }
            Err(WeatherError::Io(ref e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
            {
                tracing::debug!("Read timeout for client {}", self.peer_addr);
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                return Err(e);
            }
        };

        tracing::info!(
            "Request '{} {}' from client {}",
            request.kind.escape_ascii(),
            request.city,
            self.peer_addr
        );

        let response = self.handler.handle(&request);
        tracing::trace!("Sending {:?} to {}", response, self.peer_addr);

        if let Err(e) = write_response(&mut self.stream, &response) {
            if let WeatherError::Io(ref io_err) = e {
                if is_disconnect(io_err.kind()) {
                    tracing::debug!(
                        "Client {} disconnected before response could be sent: {}",
                        self.peer_addr,
                        e
                    );
                    return Ok(());
                }
            }
            tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
            return Err(e);
        }

        Ok(())
    }
}

fn is_disconnect(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UnexpectedEof
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
    )
}
