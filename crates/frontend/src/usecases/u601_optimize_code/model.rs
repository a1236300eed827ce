//! TSX Optimizer - Model (API functions)

use contracts::usecases::u601_optimize_code::{
    FormValue, OptimizeRequest, OptimizeResponse, SelectedFile, TransportError,
};
use wasm_bindgen::JsCast;
use web_sys::{AbortSignal, Blob, BlobPropertyBag, FormData, RequestInit, RequestMode, Response};

/// Собрать multipart-тело запроса
fn build_form_data(request: &OptimizeRequest) -> Result<FormData, TransportError> {
    let form_data = FormData::new().map_err(|e| TransportError::Request(format!("{e:?}")))?;
    for field in request.form_fields() {
        let appended = match field.value {
            FormValue::Text(text) => form_data.append_with_str(field.name, text),
            FormValue::File(file) => {
                let blob = file_blob(file)?;
                form_data.append_with_blob_and_filename(field.name, &blob, &file.name)
            }
        };
        appended.map_err(|e| TransportError::Request(format!("{e:?}")))?;
    }
    Ok(form_data)
}

fn file_blob(file: &SelectedFile) -> Result<Blob, TransportError> {
    let bytes = js_sys::Uint8Array::from(file.content.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if !file.media_type.is_empty() {
        options.set_type(&file.media_type);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| TransportError::Request(format!("{e:?}")))
}

/// Отправить код на оптимизацию
///
/// Content-Type is left to the browser: it writes `multipart/form-data`
/// together with the boundary. Any non-2xx status or a body that is not a
/// JSON object is a transport error.
pub async fn post_optimize(
    url: &str,
    request: &OptimizeRequest,
    abort: Option<&AbortSignal>,
) -> Result<OptimizeResponse, TransportError> {
    let form_data = build_form_data(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);
    if let Some(signal) = abort {
        opts.set_signal(Some(signal));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| TransportError::Request(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| TransportError::Request(format!("{e:?}")))?;

    let aborted = || abort.map(AbortSignal::aborted).unwrap_or(false);

    let window = web_sys::window().ok_or_else(|| TransportError::Request("no window".into()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            if aborted() {
                TransportError::Aborted
            } else {
                TransportError::Request(format!("{e:?}"))
            }
        })?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| TransportError::Request(format!("{e:?}")))?;

    if !resp.ok() {
        return Err(TransportError::Status(resp.status()));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json()
            .map_err(|e| TransportError::Decode(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| {
        if aborted() {
            TransportError::Aborted
        } else {
            TransportError::Decode(format!("{e:?}"))
        }
    })?;

    serde_wasm_bindgen::from_value(json).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Read a picked file into memory
pub async fn read_file(file: web_sys::File) -> Result<SelectedFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let content = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), content))
}
