//! WebSocket server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::engine::Session;
use crate::error::QuizError;
use crate::protocol::{ClientMessage, ServerMessage};

use super::handler::handle_message;

/// Serve the catalog on `port` until Ctrl-C.
pub async fn run(port: u16, catalog: Catalog) -> Result<(), QuizError> {
    let catalog = Arc::new(catalog);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, quizzes = catalog.len(), "server listening");

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let catalog = Arc::clone(&catalog);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, peer, catalog).await {
                            tracing::warn!(%peer, "connection ended with error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("failed to accept connection: {}", e);
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Drive one WebSocket connection. The connection owns its session, so
/// participants never share attempt state.
async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    catalog: Arc<Catalog>,
) -> Result<(), QuizError> {
    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    let session_id = Uuid::new_v4();
    let mut session = Session::new();
    tracing::info!(%peer, %session_id, "session opened");

    send(
        &mut ws_sender,
        &ServerMessage::Welcome {
            session_id: session_id.to_string(),
        },
    )
    .await?;

    while let Some(msg) = ws_receiver.next().await {
        let text = match msg? {
            Message::Text(text) => text.to_string(),
            Message::Close(_) => break,
            _ => continue,
        };

        let reply = match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => {
                tracing::debug!(%session_id, ?client_msg, "request");
                handle_message(&catalog, &mut session, client_msg)
            }
            Err(e) => {
                tracing::warn!(%session_id, "unreadable message: {}", e);
                ServerMessage::from(&QuizError::Parse(e))
            }
        };

        send(&mut ws_sender, &reply).await?;
    }

    tracing::info!(%session_id, "session closed");
    Ok(())
}

async fn send<S>(sink: &mut S, msg: &ServerMessage) -> Result<(), QuizError>
where
    S: Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    let json = serde_json::to_string(msg)?;
    sink.send(Message::Text(json.into())).await?;
    Ok(())
}
