use crate::ai::ChatRelay;
use crate::logger;
use crate::models::{AiRequest, AiResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Run the chat relay on its own thread so the UI loop never blocks on the
/// network. One request is in flight at a time; the UI enforces that by
/// disabling the input while waiting.
pub fn spawn_chat_worker(
    reply_tx: Sender<AiResponse>,
    request_rx: Receiver<AiRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("periodica::chat_worker".to_string())
        .spawn(move || {
            let relay = ChatRelay::from_env();
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("chat worker runtime failed to start: {}", e));
                    return;
                }
            };

            loop {
                match request_rx.recv() {
                    Ok(AiRequest::Ask {
                        element_z,
                        element_name,
                        question,
                    }) => {
                        logger::log(&format!("chat request for element {}", element_z));
                        let text = rt.block_on(relay.ask(&element_name, &question));
                        // A send failure means the UI is gone; nothing to do.
                        let _ = reply_tx.send(AiResponse::Reply { element_z, text });
                    }
                    Err(_) => {
                        logger::log("chat worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("failed to spawn chat worker thread")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_worker_replies_without_credentials() {
        // With no key configured the relay answers immediately and the
        // worker must forward that reply untouched.
        let (reply_tx, reply_rx) = mpsc::channel();
        let (request_tx, request_rx) = mpsc::channel();
        let handle = spawn_chat_worker(reply_tx, request_rx);

        if std::env::var(crate::ai::relay::API_KEY_ENV).is_ok() {
            // Can't assert on the offline reply when a real key is present.
            drop(request_tx);
            handle.join().unwrap();
            return;
        }

        request_tx
            .send(AiRequest::Ask {
                element_z: 2,
                element_name: "Helium".to_string(),
                question: "Why is it inert?".to_string(),
            })
            .unwrap();

        let response = reply_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let AiResponse::Reply { element_z, text } = response;
        assert_eq!(element_z, 2);
        assert_eq!(text, crate::ai::MISSING_KEY_REPLY);

        drop(request_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_worker_exits_when_channel_closes() {
        let (reply_tx, _reply_rx) = mpsc::channel();
        let (request_tx, request_rx) = mpsc::channel();
        let handle = spawn_chat_worker(reply_tx, request_rx);
        drop(request_tx);
        handle.join().unwrap();
    }
}
