//! View module - renders the model into a softbuffer surface
//!
//! Text goes through [`TextPainter`], which rasterizes with fontdue when a
//! font is available and draws length-matched bars otherwise.

pub mod frame;
pub mod hit_test;
pub mod text;

pub use frame::Frame;
pub use hit_test::{hit_test, HitTarget};
pub use text::TextPainter;

use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use devbyte::model::{AppModel, Message, PreviewTab, Role, ARTIFACT_PANEL_KEY, CHAT_PANEL_KEY};
use devbyte::resizable::{ChildRect, Rect};
use devbyte::theme::Theme;

/// Logical-pixel metrics, multiplied by the scale factor at draw time
const PADDING: f64 = 16.0;
const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 18.0;
const TEXT_BAR_HEIGHT: f64 = 8.0;
const ROW_HEIGHT: f64 = 40.0;
const ROW_GAP: f64 = 4.0;
const HEADER_HEIGHT: f64 = 56.0;
const INPUT_HEIGHT: f64 = 56.0;
const TAB_BAR_HEIGHT: f64 = 40.0;
const TAB_WIDTH: f64 = 96.0;
const AVATAR_SIZE: f64 = 24.0;
const HISTORY_STRIPE: f64 = 3.0;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer; softbuffer doesn't guarantee buffer contents
    /// are preserved between frames.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    text: TextPainter,
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_path: Option<&Path>,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            back_buffer: vec![0; width as usize * height as usize],
            width,
            height,
            text: TextPainter::load(font_path),
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize(width as usize * height as usize, 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            self.text.set_scale(model.scale_factor);
            draw_model(&mut frame, &mut self.text, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

#[inline]
fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Draw the whole window
pub fn draw_model(frame: &mut Frame, text: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme;
    let scale = model.scale_factor;
    frame.clear(theme.background.to_argb_u32());

    let sidebar = model.sidebar_width_px();
    if sidebar > 0.0 {
        draw_sidebar(
            frame,
            text,
            model,
            Rect::new(0.0, 0.0, sidebar, model.window_size.1 as f64),
        );
    }

    for child in model.layout.layout() {
        if child.is_handle {
            draw_handle(frame, model, child);
            continue;
        }
        let key = model.layout.panel(child.index).and_then(|p| p.key());
        frame.set_clip(child.rect);
        match key {
            Some(CHAT_PANEL_KEY) => draw_chat(frame, text, model, child.rect, scale),
            Some(ARTIFACT_PANEL_KEY) => draw_artifact(frame, text, model, child.rect, scale),
            _ => frame.fill_rect(child.rect, theme.surface.to_argb_u32()),
        }
        frame.clear_clip();
    }
}

fn draw_sidebar(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, rect: Rect) {
    let theme = &model.theme;
    let s = model.scale_factor;
    frame.set_clip(rect);
    frame.fill_rect(rect, theme.sidebar.to_argb_u32());
    frame.fill_rect(
        Rect::new(rect.x + rect.width - 1.0, rect.y, 1.0, rect.height),
        theme.border.to_argb_u32(),
    );

    // Title
    let pad = PADDING * s;
    text.draw(
        frame,
        rect.x + pad,
        rect.y + pad,
        "DevByte",
        rect.width - 2.0 * pad,
        theme.code_line.to_argb_u32(),
        s,
    );

    // New chat button
    let button = hit_test::new_chat_button(model);
    frame.draw_bordered_rect(button, None, theme.border.to_argb_u32());

    for (i, chat) in model.chat.chats.iter().enumerate() {
        let row = hit_test::chat_row(model, i);
        if model.chat.active == Some(chat.id) {
            frame.fill_rect(row, theme.surface.to_argb_u32());
        }
        if model.ui.history_open {
            frame.fill_rect(
                Rect::new(row.x, row.y, HISTORY_STRIPE * s, row.height),
                theme.accent.to_argb_u32(),
            );
        }
        text.draw(
            frame,
            row.x + pad,
            row.y + (row.height - TEXT_BAR_HEIGHT * s) / 2.0,
            &chat.title,
            row.width - 2.0 * pad,
            theme.code_line.to_argb_u32(),
            s,
        );
    }
    frame.clear_clip();
}

fn draw_handle(frame: &mut Frame, model: &AppModel, child: ChildRect) {
    let theme = &model.theme;
    let color = if model.layout.active_handle() == Some(child.index) {
        theme.accent
    } else if model.ui.hovered_handle == Some(child.index) {
        theme.surface_hover
    } else {
        theme.handle
    };
    frame.fill_rect(child.rect, color.to_argb_u32());

    // Grip
    let grip = 2.0 * model.scale_factor;
    let (cx, cy) = (
        child.rect.x + child.rect.width / 2.0,
        child.rect.y + child.rect.height / 2.0,
    );
    for offset in [-6.0, 0.0, 6.0] {
        let o = offset * model.scale_factor;
        let (x, y) = if child.rect.height > child.rect.width {
            (cx - grip / 2.0, cy + o)
        } else {
            (cx + o, cy - grip / 2.0)
        };
        frame.fill_rect(Rect::new(x, y, grip, grip), theme.code_line.to_argb_u32());
    }
}

fn draw_chat(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, rect: Rect, s: f64) {
    let theme = &model.theme;
    let pad = PADDING * s;
    frame.fill_rect(rect, theme.background.to_argb_u32());

    // Top bar
    frame.fill_rect(
        Rect::new(rect.x, rect.y + HEADER_HEIGHT * s - 1.0, rect.width, 1.0),
        theme.surface.to_argb_u32(),
    );
    let title = model
        .chat
        .active_chat()
        .map_or("New chat", |chat| chat.title.as_str());
    text.draw(
        frame,
        rect.x + pad,
        rect.y + pad,
        title,
        rect.width - 2.0 * pad,
        theme.code_line.to_argb_u32(),
        s,
    );

    let input_top = rect.y + rect.height - INPUT_HEIGHT * s - pad;
    let mut y = rect.y + HEADER_HEIGHT * s + pad;
    let inner_width = (rect.width - 2.0 * pad).max(0.0);
    for message in model.chat.messages() {
        if y > input_top {
            break;
        }
        y = draw_message(frame, text, theme, message, Rect::new(rect.x + pad, y, inner_width, 0.0), s)
            + pad;
    }

    if model.chat.is_generating {
        for i in 0..3 {
            let dot = Rect::new(rect.x + pad + i as f64 * 10.0 * s, y, 6.0 * s, 6.0 * s);
            frame.fill_rect(dot, theme.code_line.to_argb_u32());
        }
    }

    // Prompt input
    let input = Rect::new(rect.x + pad, input_top, inner_width, INPUT_HEIGHT * s);
    frame.draw_bordered_rect(input, Some(theme.surface.to_argb_u32()), theme.border.to_argb_u32());
    text.draw(
        frame,
        input.x + pad,
        input.y + (input.height - TEXT_BAR_HEIGHT * s) / 2.0,
        &model.chat.input,
        input.width - 2.0 * pad,
        theme.code_line.to_argb_u32(),
        s,
    );
}

/// Draw a message bubble starting at `at.y`; returns the bottom edge
fn draw_message(
    frame: &mut Frame,
    text: &mut TextPainter,
    theme: &Theme,
    message: &Message,
    at: Rect,
    s: f64,
) -> f64 {
    let pad = PADDING * s;
    let text_width = (at.width - AVATAR_SIZE * s - 3.0 * pad).max(CHAR_WIDTH * s);
    let chars_per_line = ((text_width / (CHAR_WIDTH * s)) as usize).max(1);
    let text_lines = message.content.chars().count().div_ceil(chars_per_line).max(1);
    let code_lines = message.code.as_deref().map_or(0, |c| c.lines().count());

    let height = pad * 2.0
        + text_lines as f64 * LINE_HEIGHT * s
        + if code_lines > 0 {
            pad + code_lines as f64 * LINE_HEIGHT * s + pad
        } else {
            0.0
        };
    let bubble = Rect::new(at.x, at.y, at.width, height);
    let (bg, avatar) = match message.role {
        Role::User => (theme.user_message, theme.accent),
        Role::Assistant => (theme.assistant_message, theme.preview_end),
    };
    frame.draw_bordered_rect(bubble, Some(bg.to_argb_u32()), theme.surface.to_argb_u32());
    frame.fill_rect(
        Rect::new(at.x + pad, at.y + pad, AVATAR_SIZE * s, AVATAR_SIZE * s),
        avatar.to_argb_u32(),
    );

    let text_x = at.x + 2.0 * pad + AVATAR_SIZE * s;
    let chars: Vec<char> = message.content.chars().collect();
    let mut y = at.y + pad;
    for chunk in chars.chunks(chars_per_line) {
        let line: String = chunk.iter().collect();
        text.draw(frame, text_x, y, &line, text_width, theme.code_line.to_argb_u32(), s);
        y += LINE_HEIGHT * s;
    }

    if let Some(code) = message.code.as_deref() {
        let block = Rect::new(
            text_x,
            y + pad / 2.0,
            text_width,
            code_lines as f64 * LINE_HEIGHT * s + pad,
        );
        frame.fill_rect(block, theme.background.to_argb_u32());
        draw_code_lines(frame, text, theme, code, block.x + pad / 2.0, block.y + pad / 2.0, block.width - pad, s);
    }
    at.y + height
}

fn draw_artifact(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, rect: Rect, s: f64) {
    let theme = &model.theme;
    frame.fill_rect(rect, theme.background.to_argb_u32());

    // Tab bar
    let tabs = Rect::new(rect.x, rect.y, rect.width, TAB_BAR_HEIGHT * s);
    frame.fill_rect(tabs, theme.sidebar.to_argb_u32());
    for tab in [PreviewTab::Code, PreviewTab::Preview] {
        let tab_rect = hit_test::tab_rect(rect, tab, s);
        if model.preview.tab == tab {
            frame.fill_rect(tab_rect, theme.surface.to_argb_u32());
            frame.fill_rect(
                Rect::new(tab_rect.x, tab_rect.y + tab_rect.height - 2.0 * s, tab_rect.width, 2.0 * s),
                theme.accent.to_argb_u32(),
            );
        }
        let label = match tab {
            PreviewTab::Code => "Code",
            PreviewTab::Preview => "Preview",
        };
        text.draw(
            frame,
            tab_rect.x + PADDING * s,
            tab_rect.y + (tab_rect.height - TEXT_BAR_HEIGHT * s) / 2.0,
            label,
            tab_rect.width - PADDING * s,
            theme.code_line.to_argb_u32(),
            s,
        );
    }

    let body = Rect::new(
        rect.x,
        rect.y + tabs.height,
        rect.width,
        (rect.height - tabs.height).max(0.0),
    );
    match model.preview.tab {
        PreviewTab::Code => {
            if let Some(code) = model.artifact_code() {
                let pad = PADDING * s;
                draw_code_lines(frame, text, theme, code, body.x + pad, body.y + pad, body.width - 2.0 * pad, s);
            }
        }
        PreviewTab::Preview => draw_hero_preview(frame, theme, body, s),
    }
}

/// The rendered hero section: gradient backdrop, heading, copy, two buttons
fn draw_hero_preview(frame: &mut Frame, theme: &Theme, body: Rect, s: f64) {
    frame.fill_gradient_h(
        body,
        theme.preview_start.to_argb_u32(),
        theme.preview_end.to_argb_u32(),
    );
    let white = 0xFFFFFFFF;
    let cx = body.x + body.width / 2.0;
    let cy = body.y + body.height / 2.0;

    let heading = (body.width * 0.6).min(420.0 * s);
    frame.fill_rect(Rect::new(cx - heading / 2.0, cy - 60.0 * s, heading, 24.0 * s), white);
    let copy = (body.width * 0.7).min(520.0 * s);
    frame.fill_rect_blended(
        Rect::new(cx - copy / 2.0, cy - 20.0 * s, copy, 8.0 * s),
        0xCCFFFFFF,
    );
    frame.fill_rect_blended(
        Rect::new(cx - copy * 0.4, cy - 4.0 * s, copy * 0.8, 8.0 * s),
        0xCCFFFFFF,
    );

    let button_w = 120.0 * s;
    let button_h = 40.0 * s;
    let gap = 16.0 * s;
    let top = cy + 24.0 * s;
    frame.fill_rect(Rect::new(cx - gap / 2.0 - button_w, top, button_w, button_h), white);
    frame.draw_bordered_rect(Rect::new(cx + gap / 2.0, top, button_w, button_h), None, white);
}

#[allow(clippy::too_many_arguments)]
fn draw_code_lines(
    frame: &mut Frame,
    text: &mut TextPainter,
    theme: &Theme,
    code: &str,
    x: f64,
    y: f64,
    width: f64,
    s: f64,
) {
    for (i, line) in code.lines().enumerate() {
        let indent = line.chars().take_while(|c| *c == ' ').count();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_x = x + indent as f64 * CHAR_WIDTH * s;
        text.draw(
            frame,
            line_x,
            y + i as f64 * LINE_HEIGHT * s,
            trimmed,
            (x + width - line_x).max(0.0),
            theme.code_line.to_argb_u32(),
            s,
        );
    }
}
