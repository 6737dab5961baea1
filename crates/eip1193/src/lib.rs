//! EIP-1193 Provider Binding
//!
//! Thin wrapper around the wallet object browser extensions inject as
//! `window.ethereum`. Requests go through `request({ method, params })`,
//! events through `on(name, listener)`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// User rejected the request
pub const USER_REJECTED: i64 = 4001;
/// The requested chain has not been added to the wallet
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

#[wasm_bindgen]
extern "C" {
    /// Injected provider object
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    pub type Provider;

    #[wasm_bindgen(method, catch, js_name = request)]
    fn raw_request(this: &Provider, args: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Provider, event: &str, listener: &js_sys::Function);
}

/// Error returned by the wallet (`{ code, message }`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
    }

    /// Pull `code` and `message` off whatever the wallet rejected with
    fn from_js(value: JsValue) -> Self {
        let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
            .map(|c| c as i64)
            .unwrap_or(-1);
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self { code, message }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for ProviderError {}

#[derive(Serialize)]
struct RequestArguments<'a, P> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

impl Provider {
    /// Look up `window.ethereum`, `None` when no wallet is installed
    pub fn detect() -> Option<Provider> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(value.unchecked_into())
    }

    /// Send a JSON-RPC request through the wallet
    pub async fn request<P, T>(&self, method: &str, params: Option<P>) -> Result<T, ProviderError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        // Plain objects, not JS Maps: wallets reject Map params
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let args = RequestArguments { method, params }
            .serialize(&serializer)
            .map_err(|e| ProviderError::new(-1, format!("Serialization error: {}", e)))?;

        let promise = self.raw_request(&args).map_err(ProviderError::from_js)?;
        let result = JsFuture::from(promise).await.map_err(ProviderError::from_js)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::new(-1, format!("Response error: {}", e)))
    }

    /// Subscribe to `accountsChanged`; listener lives for the page lifetime
    pub fn on_accounts_changed<F>(&self, mut listener: F)
    where
        F: FnMut(Vec<String>) + 'static,
    {
        let cb = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap_or_default();
            listener(accounts);
        });
        self.on("accountsChanged", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    /// Subscribe to `chainChanged`; the payload is the hex chain id
    pub fn on_chain_changed<F>(&self, mut listener: F)
    where
        F: FnMut(String) + 'static,
    {
        let cb = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            if let Some(chain_id) = value.as_string() {
                listener(chain_id);
            }
        });
        self.on("chainChanged", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(ProviderError::new(4001, "User rejected the request.").is_user_rejected());
        assert!(ProviderError::new(4902, "Unrecognized chain ID").is_unrecognized_chain());

        let other = ProviderError::new(-32603, "Internal JSON-RPC error.");
        assert!(!other.is_user_rejected());
        assert!(!other.is_unrecognized_chain());
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::new(4902, "Unrecognized chain ID \"0xaa36a7\"");
        assert_eq!(err.to_string(), "Unrecognized chain ID \"0xaa36a7\" (code 4902)");
    }
}
