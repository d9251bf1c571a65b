use contracts::usecases::u501_bulk_import::{BulkImportForm, EventStreamDecoder, ImportEvent};
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, FormData, ReadableStreamDefaultReader, RequestInit, Response};

use crate::shared::api_utils::{api_url, error_message};
use crate::shared::session::Session;

/// Upload the CSV and feed every decoded event to `on_event` as it arrives.
///
/// gloo-net buffers whole bodies, so the request goes through `fetch`
/// directly and the body is read chunk by chunk.
pub async fn stream_bulk_import(
    session: &Session,
    form: &BulkImportForm,
    file: &web_sys::File,
    mut on_event: impl FnMut(ImportEvent),
) -> Result<(), String> {
    let window = window().ok_or("No window object")?;

    let body = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    body.append_with_blob_and_filename(BulkImportForm::FILE_FIELD, file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    for (name, value) in form.text_parts() {
        body.append_with_str(name, &value)
            .map_err(|e| format!("Failed to build form: {:?}", e))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&body);

    let request = web_sys::Request::new_with_str_and_init(
        &api_url("/api/scraper/bulk-scrape-csv-stream"),
        &opts,
    )
    .map_err(|e| format!("Failed to create request: {:?}", e))?;
    if let Some(value) = session.authorization() {
        request
            .headers()
            .set("Authorization", &value)
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Failed to send request: {:?}", e))?;
    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        let status = response.status();
        let text = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        let message = format!("Failed to start the import: {}", error_message(status, &text));
        log::error!("{}", message);
        return Err(message);
    }

    let stream = response.body().ok_or("Response has no body")?;
    let reader: ReadableStreamDefaultReader = stream
        .get_reader()
        .dyn_into()
        .map_err(|_| "Failed to read response body")?;

    let mut decoder = EventStreamDecoder::new();
    loop {
        let chunk = JsFuture::from(reader.read())
            .await
            .map_err(|e| format!("Import stream interrupted: {:?}", e))?;
        let done = Reflect::get(&chunk, &JsValue::from_str("done"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }
        let value = Reflect::get(&chunk, &JsValue::from_str("value"))
            .map_err(|e| format!("Import stream interrupted: {:?}", e))?;
        let bytes = Uint8Array::new(&value).to_vec();
        for event in decoder.push(&bytes) {
            on_event(event);
        }
    }
    for event in decoder.finish() {
        on_event(event);
    }
    Ok(())
}
