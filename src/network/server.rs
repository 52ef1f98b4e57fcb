//! TCP Server
//!
//! Accepts connections and dispatches them to worker threads.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam::channel;

use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::weather::{Handler, RandomSource, ValueSource};

use super::Connection;

/// TCP server for the weather service
///
/// Owns its listening socket; the socket is released when the server is
/// dropped, including when `run` returns early with an error.
pub struct Server<S = RandomSource> {
    config: Config,
    listener: TcpListener,
    handler: Arc<Handler<S>>,
    shutdown: Arc<AtomicBool>,
}

impl<S: ValueSource + 'static> Server<S> {
    /// Bind the listening socket
    pub fn bind(config: Config, handler: Handler<S>) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr)?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            listener,
            handler: Arc::new(handler),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the server is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Handle that stops `run` from another thread
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle> {
        Ok(ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
            addr: self.local_addr()?,
        })
    }

    /// Start the server (blocking)
    ///
    /// Returns once a shutdown is requested and every worker has finished
    /// its current connection.
    pub fn run(self) -> Result<()> {
        let (tx, rx) = channel::bounded::<TcpStream>(self.config.workers);

        let mut workers = Vec::with_capacity(self.config.workers);
        for id in 0..self.config.workers {
            let rx = rx.clone();
            let handler = Arc::clone(&self.handler);
            let config = self.config.clone();

            let worker = thread::Builder::new()
                .name(format!("weather-worker-{}", id))
                .spawn(move || {
                    for stream in rx.iter() {
                        serve(stream, &handler, &config);
                    }
                })?;
            workers.push(worker);
        }
        drop(rx);

        tracing::info!("Waiting for clients ({} worker(s))", self.config.workers);

        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::SeqCst) {
                break;
            }

            match stream {
                Ok(stream) => {
                    if tx.send(stream).is_err() {
                        return Err(WeatherError::Network(
                            "all connection workers have stopped".to_string(),
                        ));
                    }
                }
                Err(e) => tracing::warn!("accept() failed: {}", e),
            }
        }

        drop(tx);
        for worker in workers {
            if worker.join().is_err() {
                tracing::warn!("Connection worker panicked");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Service one accepted stream; errors end the connection, never the server
fn serve<S: ValueSource>(stream: TcpStream, handler: &Arc<Handler<S>>, config: &Config) {
    let result = Connection::new(stream, Arc::clone(handler)).and_then(|mut conn| {
        conn.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;
        conn.handle()
    });

    if let Err(e) = result {
        tracing::warn!("Connection error: {}", e);
    }
}

/// Requests a running server to stop
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    addr: SocketAddr,
}

impl ShutdownHandle {
    /// Signal the server to shutdown gracefully
    ///
    /// The acceptor is blocked in `accept`, so a throwaway connection is made
    /// to wake it up.
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);

        let mut addr = self.addr;
        if addr.ip().is_unspecified() {
            let loopback = match addr.ip() {
                IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
            };
            addr.set_ip(loopback);
        }

        if let Err(e) = TcpStream::connect(addr) {
            tracing::debug!("Shutdown wake-up connection failed: {}", e);
        }
    }
}
