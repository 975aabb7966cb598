#![allow(dead_code)]

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fridge_chef::providers::{CompletionProvider, ImageProvider, InlinePart};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::error::Error;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Response with two recipe cards, shaped like the chef prompt asks for.
pub const TWO_RECIPES: &str = "\
**요리 이름:** 치품송 꼬치구이
**총평:** 통째로 구워 치즈가 살아있는 꼬치
**입력한 재료:** 치품송, 양파
**추가로 필요한 재료:** 올리브유, 후추
**간단한 레시피:**
1. 치품송을 1cm 두께로 동그랗게 썬다.
2. 양파와 번갈아 꼬치에 꽂는다.
3. 에어프라이어에 6분 굽는다.

---

**요리 이름:** 치품송 에그 스테이크
**총평:** 계란과 함께 즐기는 든든한 한 끼
**입력한 재료:** 치품송, 계란, 양파
**추가로 필요한 재료:** 없음
**간단한 레시피:**
1. 치품송을 길게 반으로 자른다.
2. 오븐에 굽고 계란 프라이를 올린다.";

/// Completion stub returning a fixed answer and counting calls.
pub struct StubCompletion {
    response: Result<String, String>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubCompletion {
    pub fn ok(text: &str) -> Self {
        Self::with(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Err(message.to_string()))
    }

    fn with(response: Result<String, String>) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl CompletionProvider for StubCompletion {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .map_err(|e| -> Box<dyn Error + Send + Sync> { e.into() })
    }
}

/// Image stub answering per prompt: the first matching rule wins.
pub struct StubImages {
    rules: Vec<(String, Result<Vec<InlinePart>, String>)>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StubImages {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer prompts containing `needle` with the given parts
    pub fn when(mut self, needle: &str, parts: Result<Vec<InlinePart>, String>) -> Self {
        self.rules.push((needle.to_string(), parts));
        self
    }

    pub fn requested(&self) -> Arc<Mutex<Vec<String>>> {
        self.requested.clone()
    }
}

#[async_trait]
impl ImageProvider for StubImages {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Vec<InlinePart>, Box<dyn Error + Send + Sync>> {
        self.requested.lock().unwrap().push(prompt.to_string());
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, parts)| {
                parts
                    .clone()
                    .map_err(|e| -> Box<dyn Error + Send + Sync> { e.into() })
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(width, height, Rgb([240u8, 180, 90]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn png_part(width: u32, height: u32) -> InlinePart {
    InlinePart {
        mime_type: "image/png".to_string(),
        data: STANDARD.encode(png_bytes(width, height)),
    }
}

pub fn corrupt_png_part() -> InlinePart {
    InlinePart {
        mime_type: "image/png".to_string(),
        data: STANDARD.encode(b"\x89PNG truncated"),
    }
}
