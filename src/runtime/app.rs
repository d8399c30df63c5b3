use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
#[cfg(debug_assertions)]
use winit::keyboard::{Key, NamedKey};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use devbyte::cli::StartupConfig;
use devbyte::commands::{Cmd, CursorOverride};
use devbyte::messages::{AppMsg, ChatMsg, LayoutMsg, Msg, UiMsg};
use devbyte::model::{AppModel, PreviewTab};
use devbyte::resizable::{Axis, InputSource, Point};
use devbyte::update::update;

use crate::view::{hit_test, HitTarget, Renderer};

use super::input::handle_key;

/// How often the loop wakes to drain replies from worker threads
const ASYNC_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<Point>,
    /// Cursor forced for the duration of a drag
    cursor_override: Option<CursorOverride>,
    /// A drag move asked for an animation frame
    frame_requested: bool,
    should_quit: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(startup_config: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let StartupConfig {
            config,
            open_preview,
        } = startup_config;
        let (width, height) = (config.window_width, config.window_height);

        let mut model = AppModel::new(config, width, height);
        if open_preview {
            update(&mut model, Msg::Ui(UiMsg::OpenCode));
        }

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            cursor_override: None,
            frame_requested: false,
            should_quit: false,
            msg_tx,
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("DevByte")
            .with_inner_size(PhysicalSize::new(
                self.model.window_size.0,
                self.model.window_size.1,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            self.model.config.font_path.as_deref(),
        )?;

        let size = window.inner_size();
        update(
            &mut self.model,
            Msg::App(AppMsg::ScaleFactorChanged(window.scale_factor())),
        );
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(size.width, size.height)),
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Hover cursor, suppressed while a drag holds the override
    fn update_cursor_icon(&self) {
        let Some(window) = &self.window else { return };
        if self.cursor_override.is_some() {
            return;
        }
        let icon = match self.model.ui.hovered_handle {
            Some(_) => match self.model.layout.axis() {
                Axis::Horizontal => CursorIcon::ColResize,
                Axis::Vertical => CursorIcon::RowResize,
            },
            None => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn handle_touch(&mut self, touch: &Touch) -> Option<Cmd> {
        let pos = Point::new(touch.location.x, touch.location.y);
        let source = InputSource::Touch(touch.id);
        let msg = match touch.phase {
            TouchPhase::Started => LayoutMsg::PointerDown { pos, source },
            TouchPhase::Moved => LayoutMsg::PointerMove { pos, source },
            TouchPhase::Ended | TouchPhase::Cancelled => LayoutMsg::PointerUp { source },
        };
        update(&mut self.model, Msg::Layout(msg))
    }

    /// A left press the split engine did not claim
    fn handle_click(&mut self, pos: Point) -> Option<Cmd> {
        let msg = match hit_test(&self.model, pos)? {
            HitTarget::NewChat => Msg::Chat(ChatMsg::NewChat),
            HitTarget::Chat(id) => Msg::Chat(ChatMsg::SelectChat(id)),
            HitTarget::Tab(tab) => match tab {
                PreviewTab::Code => Msg::Ui(UiMsg::StopPreview),
                PreviewTab::Preview => Msg::Ui(UiMsg::StartPreview),
            },
        };
        update(&mut self.model, msg)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            // Losing the window ends any drag; the release may never arrive
            WindowEvent::Focused(false) | WindowEvent::Occluded(true) => {
                update(&mut self.model, Msg::Layout(LayoutMsg::CancelDrag))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }

                #[cfg(debug_assertions)]
                if event.logical_key == Key::Named(NamedKey::F7) {
                    let dump = crate::debug_dump::StateDump::from_model(&self.model);
                    match dump.save_to_file() {
                        Ok(path) => tracing::info!("State dumped to: {}", path.display()),
                        Err(e) => tracing::warn!("Failed to dump state: {}", e),
                    }
                    return None;
                }

                let ctrl = self.modifiers.control_key() || self.modifiers.super_key();
                handle_key(&mut self.model, &event.logical_key, ctrl)
            }
            WindowEvent::RedrawRequested => {
                if std::mem::take(&mut self.frame_requested) {
                    update(&mut self.model, Msg::Layout(LayoutMsg::AnimationFrame));
                }
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Point::new(position.x, position.y);
                self.mouse_position = Some(pos);
                let cmd = update(
                    &mut self.model,
                    Msg::Layout(LayoutMsg::PointerMove {
                        pos,
                        source: InputSource::Mouse,
                    }),
                );
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.mouse_position?;
                let drag = update(
                    &mut self.model,
                    Msg::Layout(LayoutMsg::PointerDown {
                        pos,
                        source: InputSource::Mouse,
                    }),
                );
                drag.or_else(|| self.handle_click(pos))
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => update(
                &mut self.model,
                Msg::Layout(LayoutMsg::PointerUp {
                    source: InputSource::Mouse,
                }),
            ),
            WindowEvent::Touch(touch) => self.handle_touch(touch),
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::SetCursor(cursor) => {
                self.cursor_override = Some(cursor);
                if let Some(window) = &self.window {
                    window.set_cursor(match cursor {
                        CursorOverride::ColResize => CursorIcon::ColResize,
                        CursorOverride::RowResize => CursorIcon::RowResize,
                    });
                }
            }
            Cmd::ResetCursor => {
                self.cursor_override = None;
                self.update_cursor_icon();
            }
            Cmd::RequestFrame => {
                self.frame_requested = true;
            }
            Cmd::ScheduleResponse { chat, delay_ms } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Chat(ChatMsg::ResponseReady { chat }));
                });
            }
            Cmd::CopyToClipboard(text) => match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(text) {
                        tracing::warn!("Failed to copy to clipboard: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
            },
            Cmd::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);

        let should_redraw = if is_ours && !should_exit {
            match self.handle_event(&event) {
                Some(cmd) => {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                }
                None => false,
            }
        } else {
            false
        };

        if should_exit || self.should_quit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::wait_duration(ASYNC_POLL_INTERVAL));

        if self.process_async_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
