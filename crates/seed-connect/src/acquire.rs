//! Connection acquisition across a prioritized endpoint list with an
//! interactive fallback loop.

use crate::probe::Probe;
use crate::redact_credentials;
use mongodb::Client;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::time::Duration;

/// Terminal outcome of acquisition.
pub enum Acquired {
    /// A probe succeeded; the handle is live and authenticated.
    Connected(Client),
    /// The operator explicitly chose to abort. A clean stop, not an error.
    Aborted,
}

/// One answer from the interactive fallback prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackChoice {
    /// Probe this manually entered endpoint next.
    TryEndpoint(String),
    /// Stop trying; the operator wants out.
    Abort,
}

/// The interactive fallback capability.
///
/// Injectable so tests can drive the acquisition loop with scripted choices
/// instead of a real terminal.
pub trait FallbackPrompt {
    fn next_choice(&mut self) -> std::io::Result<FallbackChoice>;
}

/// Console implementation of the fallback prompt, generic over the I/O pair
/// so tests can run it against in-memory buffers.
pub struct ConsoleFallbackPrompt<R, W> {
    input: R,
    output: W,
}

impl ConsoleFallbackPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R, W> ConsoleFallbackPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FallbackPrompt for ConsoleFallbackPrompt<R, W> {
    fn next_choice(&mut self) -> std::io::Result<FallbackChoice> {
        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "All configured MongoDB endpoints failed to connect."
            )?;
            writeln!(self.output, "1) Enter a new MongoDB URI manually")?;
            writeln!(self.output, "2) Quit")?;
            write!(self.output, "Your choice (1/2): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF on the input is treated as an abort.
                return Ok(FallbackChoice::Abort);
            }
            match line.trim() {
                "1" => {
                    write!(
                        self.output,
                        "Enter MongoDB URI (e.g. mongodb://localhost:27017/test): "
                    )?;
                    self.output.flush()?;
                    let mut uri = String::new();
                    if self.input.read_line(&mut uri)? == 0 {
                        return Ok(FallbackChoice::Abort);
                    }
                    let uri = uri.trim();
                    if uri.is_empty() {
                        writeln!(self.output, "Empty URI, please try again.")?;
                        continue;
                    }
                    return Ok(FallbackChoice::TryEndpoint(uri.to_string()));
                }
                "2" => return Ok(FallbackChoice::Abort),
                _ => writeln!(self.output, "Invalid input. Please enter '1' or '2'.")?,
            }
        }
    }
}

enum AcquireState {
    ProbingConfigured(usize),
    ProbingInteractive,
    Connected(Client),
    Aborted,
}

/// Yield one working connection handle or a clean operator abort.
///
/// Configured endpoints are probed in exact list order with the same bounded
/// timeout each; the first success short-circuits the rest. Only when every
/// configured endpoint has failed does the interactive loop start, and it
/// repeats until a manually entered endpoint probes successfully or the
/// operator aborts. Probe failures never escape this function; the only
/// error it returns is an I/O failure of the prompt itself.
pub async fn acquire<P: Probe + ?Sized>(
    probe: &P,
    endpoints: &[String],
    timeout: Duration,
    prompt: &mut dyn FallbackPrompt,
) -> std::io::Result<Acquired> {
    let mut state = AcquireState::ProbingConfigured(0);
    loop {
        state = match state {
            AcquireState::ProbingConfigured(next) => match endpoints.get(next) {
                Some(endpoint) => match probe_logged(probe, endpoint, timeout).await {
                    Some(client) => AcquireState::Connected(client),
                    None => AcquireState::ProbingConfigured(next + 1),
                },
                None => {
                    if endpoints.is_empty() {
                        tracing::warn!("no endpoints configured, falling back to manual entry");
                    } else {
                        tracing::warn!(
                            "all {} configured endpoints failed, falling back to manual entry",
                            endpoints.len()
                        );
                    }
                    AcquireState::ProbingInteractive
                }
            },
            AcquireState::ProbingInteractive => match prompt.next_choice()? {
                FallbackChoice::TryEndpoint(endpoint) => {
                    match probe_logged(probe, &endpoint, timeout).await {
                        Some(client) => AcquireState::Connected(client),
                        None => AcquireState::ProbingInteractive,
                    }
                }
                FallbackChoice::Abort => AcquireState::Aborted,
            },
            AcquireState::Connected(client) => return Ok(Acquired::Connected(client)),
            AcquireState::Aborted => {
                tracing::info!("exiting at operator request");
                return Ok(Acquired::Aborted);
            }
        };
    }
}

async fn probe_logged<P: Probe + ?Sized>(
    probe: &P,
    endpoint: &str,
    timeout: Duration,
) -> Option<Client> {
    let redacted = redact_credentials(endpoint);
    tracing::info!("attempting MongoDB endpoint {redacted}");
    match probe.probe(endpoint, timeout).await {
        Ok(client) => {
            tracing::info!("connected successfully to {redacted}");
            Some(client)
        }
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }
}
