use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const FALLBACK_MIME: &str = "image/jpeg";

/// Encodes raw image bytes as a `data:` URL, the form the face endpoints
/// accept in `image_base64`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// First file selected in an `<input type="file">`, if any.
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Không đọc được tệp ảnh".to_string())?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "Tệp ảnh không hợp lệ".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

pub async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let bytes = read_file_bytes(file).await?;
    Ok(to_data_url(&file.type_(), &bytes))
}
