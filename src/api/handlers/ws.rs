// src/api/handlers/ws.rs
use actix::{Actor, Addr, AsyncContext, Handler, Message, StreamHandler};
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One phase transition of a running experiment, pushed to every connected
/// page. `step` is the zero-based phase index the page script uses to mark
/// earlier steps complete.
#[derive(Message, Clone, Serialize)]
#[rtype(result = "()")]
pub struct ProgressUpdate {
    pub run_id: String,
    pub step: usize,
    pub label: String,
}

/// Fan-out of progress updates to the connected experiment pages. Losing
/// the socket only loses the live feed; the run outcome still arrives as
/// the HTTP response.
#[derive(Clone)]
pub struct ProgressBroker {
    clients: Arc<RwLock<Vec<Addr<ProgressConnection>>>>,
}

impl ProgressBroker {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn register(&self, addr: Addr<ProgressConnection>) {
        let mut clients = self.clients.write().await;
        clients.push(addr);
    }

    pub async fn unregister(&self, addr: &Addr<ProgressConnection>) {
        let mut clients = self.clients.write().await;
        clients.retain(|c| c != addr);
    }

    pub async fn broadcast(&self, msg: ProgressUpdate) {
        let clients = self.clients.read().await;
        for client in clients.iter() {
            client.do_send(msg.clone());
        }
    }
}

impl Default for ProgressBroker {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ProgressConnection {
    broker: ProgressBroker,
}

impl ProgressConnection {
    pub fn new(broker: ProgressBroker) -> Self {
        Self { broker }
    }
}

impl Actor for ProgressConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let addr = ctx.address();
        let broker = self.broker.clone();
        actix::spawn(async move {
            broker.register(addr).await;
        });
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        let addr = ctx.address();
        let broker = self.broker.clone();
        actix::spawn(async move {
            broker.unregister(&addr).await;
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ProgressConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        // The feed is one-way; clients only ever ping or close.
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => ctx.close(reason),
            _ => (),
        }
    }
}

impl Handler<ProgressUpdate> for ProgressConnection {
    type Result = ();

    fn handle(&mut self, msg: ProgressUpdate, ctx: &mut Self::Context) {
        if let Ok(json) = serde_json::to_string(&msg) {
            ctx.text(json);
        }
    }
}

pub async fn progress_feed(
    req: HttpRequest,
    stream: web::Payload,
    broker: web::Data<ProgressBroker>,
) -> Result<HttpResponse, Error> {
    let conn = ProgressConnection::new(broker.get_ref().clone());
    ws::start(conn, &req, stream)
}
