use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};

use crate::client::CodeforcesApi;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Maximum bytes per JSON-RPC message (1 MiB).
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    api: CodeforcesApi,
    initialized: bool,
}

impl McpServer {
    pub fn new(api: CodeforcesApi) -> Self {
        Self {
            api,
            initialized: false,
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        self.serve(BufReader::new(stdin), &mut stdout).await
    }

    /// Serve requests from `reader` until EOF, writing responses to `writer`.
    pub async fn serve<R, W>(
        &mut self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWriteExt + Unpin,
    {
        tracing::info!(api = self.api.base_url(), "serving MCP over stdio");
        let mut raw = Vec::new();

        loop {
            raw.clear();
            // Never buffer more than one byte past the limit.
            let n = (&mut reader)
                .take(MAX_MESSAGE_BYTES as u64 + 1)
                .read_until(b'\n', &mut raw)
                .await?;
            if n == 0 {
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                if raw.last() != Some(&b'\n') {
                    discard_line(&mut reader).await?;
                }
                tracing::warn!(limit = MAX_MESSAGE_BYTES, "message too large");
                write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                    .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                        .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, "parse error");
                    write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                        .await?;
                    continue;
                }
            };

            if req.jsonrpc != "2.0" {
                write_response(
                    writer,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                )
                .await?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.id.is_none() {
                    continue;
                }
                write_response(
                    writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )
                .await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.api).await {
                write_response(writer, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }
}

/// Skip input up to and including the next newline without buffering it.
async fn discard_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (used, found) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|b| *b == b'\n') {
                Some(i) => (i + 1, true),
                None => (buf.len(), false),
            }
        };
        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

async fn write_response<W>(
    writer: &mut W,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: AsyncWriteExt + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
