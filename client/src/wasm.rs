//! Browser binding
//!
//! The page owns the WebSocket event handlers and the `requestAnimationFrame`
//! loop and forwards everything here.

use std::cell::RefCell;

use game_core::Player;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use web_sys::{Element, WebSocket};

use crate::config::ClientConfig;
use crate::driver::{FrameControl, FrameDriver};
use crate::network::{Channel, NetError};
use crate::scene::{SceneObject, SceneRenderer, ScoreDisplay};

#[wasm_bindgen]
extern "C" {
    /// Scene object supplied by the page
    pub type JsScene;

    #[wasm_bindgen(method, js_name = setPosition)]
    fn js_set_position(this: &JsScene, name: &str, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = orientCamera)]
    fn js_orient_camera(this: &JsScene, player_num: u8);
}

impl SceneRenderer for JsScene {
    fn set_position(&mut self, object: SceneObject, pos: Vec3) {
        let name = match object {
            SceneObject::Ball => "ball",
            SceneObject::Paddle(Player::One) => "paddle1",
            SceneObject::Paddle(Player::Two) => "paddle2",
        };
        self.js_set_position(name, pos.x, pos.y, pos.z);
    }

    fn orient_camera(&mut self, viewer: Player) {
        self.js_orient_camera(viewer.number());
    }
}

/// Score labels `#p1-score` and `#p2-score`
pub struct DomScoreDisplay {
    p1: Element,
    p2: Element,
}

impl DomScoreDisplay {
    fn from_document() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
        };
        Ok(Self {
            p1: find("p1-score")?,
            p2: find("p2-score")?,
        })
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn set_score_text(&mut self, player: Player, text: &str) {
        match player {
            Player::One => self.p1.set_inner_html(text),
            Player::Two => self.p2.set_inner_html(text),
        }
    }
}

pub struct WsChannel(WebSocket);

impl Channel for WsChannel {
    fn send_text(&self, text: &str) -> Result<(), NetError> {
        if self.0.ready_state() != WebSocket::OPEN {
            return Err(NetError::Closed);
        }
        self.0
            .send_with_str(text)
            .map_err(|e| NetError::Send(format!("{:?}", e)))
    }

    fn close(&self) {
        if let Err(e) = self.0.close() {
            log::warn!("WebSocket close failed: {:?}", e);
        }
    }
}

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

type BrowserDriver = FrameDriver<WsChannel, JsScene, DomScoreDisplay>;

thread_local! {
    static CLIENT: RefCell<Option<BrowserDriver>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut BrowserDriver) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Create the client. `config_json` may override any `ClientConfig` key.
#[wasm_bindgen]
pub fn init_client(
    socket: WebSocket,
    scene: JsScene,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let config = match config_json {
        Some(json) => ClientConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
        None => ClientConfig::default(),
    };
    let display = DomScoreDisplay::from_document()?;
    let seed = js_sys::Date::now() as u64;
    let driver = FrameDriver::new(config, WsChannel(socket), scene, display, seed);

    CLIENT.with(|cell| *cell.borrow_mut() = Some(driver));
    Ok(())
}

/// Default server address for the page to connect to
#[wasm_bindgen]
pub fn default_server_url() -> String {
    ClientConfig::default().server_url
}

#[wasm_bindgen]
pub fn handle_websocket_message(text: &str) -> Result<(), JsValue> {
    // Malformed frames are logged and dropped inside the driver
    with_client(|client| {
        let _ = client.handle_message(text);
    })
}

#[wasm_bindgen]
pub fn handle_websocket_close() -> Result<(), JsValue> {
    with_client(|client| client.channel_closed())
}

#[wasm_bindgen]
pub fn key_down(code: &str) -> Result<bool, JsValue> {
    with_client(|client| client.key_down(code))
}

#[wasm_bindgen]
pub fn key_up(code: &str) -> Result<bool, JsValue> {
    with_client(|client| client.key_up(code))
}

#[wasm_bindgen]
pub fn clear_input() -> Result<(), JsValue> {
    with_client(|client| client.clear_input())
}

/// Run one frame. Returns whether another frame should be requested.
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
    with_client(|client| client.tick(now_ms) == FrameControl::Continue)
}
