//! The thin client layer shared by the purchase and payment dialogs:
//! request payloads for the fulfillment webhooks, tolerant parsing of
//! their inconsistently-shaped responses, and link validation.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::services::Platform;

/// Client-enforced lifetime of a generated PIX charge.
pub const PIX_TTL_SECONDS: u32 = 900;
/// Cadence of the payment-status polling loop.
pub const STATUS_POLL_INTERVAL_MS: u32 = 4_000;

pub const MAX_LINK_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Por favor, insira o link da rede social")]
    Empty,
    #[error("Link muito longo")]
    TooLong,
    #[error("Cole um link válido (deve começar com https://)")]
    Invalid,
    #[error("Por favor, insira um link válido do Instagram")]
    NotInstagram,
}

/// Trims and validates a destination link. No network call is ever made
/// for a link that fails here.
pub fn validate_link(input: &str) -> Result<String, LinkError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LinkError::Empty);
    }
    if trimmed.len() > MAX_LINK_LENGTH {
        return Err(LinkError::TooLong);
    }
    if Url::parse(trimmed).is_err() {
        return Err(LinkError::Invalid);
    }
    Ok(trimmed.to_string())
}

/// The free-trial form only serves Instagram profiles.
pub fn validate_instagram_link(input: &str) -> Result<String, LinkError> {
    let link = validate_link(input)?;
    if !link.contains("instagram.com") {
        return Err(LinkError::NotInstagram);
    }
    Ok(link)
}

#[derive(Serialize)]
pub struct PixOrderRequest {
    pub url: String,
    #[serde(rename = "packageId")]
    pub package_id: Option<&'static str>,
    pub servico: &'static str,
    pub valor: f64,
    #[serde(rename = "serviceId")]
    pub service_id: &'static str,
    pub quantidade: u32,
}

#[derive(Serialize, Clone, PartialEq)]
pub struct StatusCheckRequest {
    #[serde(rename = "paymentId")]
    pub payment_id: Option<String>,
    #[serde(rename = "qrCodeCopyPaste")]
    pub qr_code_copy_paste: String,
    #[serde(rename = "serviceId")]
    pub service_id: &'static str,
    pub servico: &'static str,
    pub url: String,
}

#[derive(Serialize)]
pub struct FreeOrderRequest {
    pub url: String,
    pub tipo: &'static str,
    pub quantidade: u32,
    pub plataforma: Platform,
}

/// A PIX charge as issued by the webhook. Held opaquely until it is paid
/// or expires.
#[derive(Clone, PartialEq, Debug)]
pub struct PixPayment {
    pub qr_code_base64: String,
    pub copy_paste_code: String,
    pub payment_id: Option<String>,
}

/// The webhook sometimes wraps its JSON body in a single-element array.
pub fn first_payload(body: Value) -> Value {
    match body {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        Value::Array(_) => Value::Null,
        other => other,
    }
}

fn non_empty_str(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn extract_payment_id(payload: &Value) -> Option<String> {
    ["paymentId", "pagamentoId", "id", "externalReference"]
        .iter()
        .find_map(|key| match payload.get(*key) {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        })
}

/// A 2xx PIX-generation response without a QR image is still a failure.
/// Some responses omit the copy-paste code; the QR payload doubles as it.
pub fn parse_pix_response(body: Value) -> Option<PixPayment> {
    let payload = first_payload(body);
    let qr_code_base64 = non_empty_str(&payload, "qrCodeBase64")?;
    let copy_paste_code =
        non_empty_str(&payload, "qrCodeCopyPaste").unwrap_or_else(|| qr_code_base64.clone());
    let payment_id = extract_payment_id(&payload);
    Some(PixPayment {
        qr_code_base64,
        copy_paste_code,
        payment_id,
    })
}

/// Normalizes the status webhook's inconsistent schema down to one bool.
/// The first non-empty text field among `status`, `paymentStatus`,
/// `situacao` and `mensagem` is checked for an approval keyword; the
/// boolean `approved`/`pago` flags are accepted independently.
pub fn payment_approved(payload: &Value) -> bool {
    let status_text = ["status", "paymentStatus", "situacao", "mensagem"]
        .iter()
        .find_map(|key| non_empty_str(payload, key))
        .map(|text| text.to_lowercase())
        .unwrap_or_default();

    status_text.contains("approved")
        || status_text.contains("aprovado")
        || payload.get("approved").and_then(Value::as_bool) == Some(true)
        || payload.get("pago").and_then(Value::as_bool) == Some(true)
}

/// Some upstream responses already carry a data URL, others the raw base64.
pub fn qr_image_src(qr_code_base64: &str) -> String {
    if qr_code_base64.starts_with("data:") {
        qr_code_base64.to_string()
    } else {
        format!("data:image/png;base64,{}", qr_code_base64)
    }
}

/// "MM:SS" for the countdown display.
pub fn format_seconds(total: u32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_validation_rejects_the_usual_suspects() {
        assert_eq!(validate_link(""), Err(LinkError::Empty));
        assert_eq!(validate_link("   "), Err(LinkError::Empty));
        assert_eq!(validate_link(&"a".repeat(2049)), Err(LinkError::TooLong));
        assert_eq!(validate_link("não é um link"), Err(LinkError::Invalid));
        assert_eq!(validate_link("instagram.com/perfil"), Err(LinkError::Invalid));
    }

    #[test]
    fn link_validation_accepts_absolute_urls_and_trims() {
        assert_eq!(
            validate_link("  https://instagram.com/p/abc  "),
            Ok("https://instagram.com/p/abc".to_string())
        );
        assert!(validate_link("https://www.tiktok.com/@user/video/1").is_ok());
        assert!(validate_link("http://youtube.com/watch?v=x").is_ok());
    }

    #[test]
    fn exactly_max_length_link_is_accepted() {
        let padding = "a".repeat(2048 - "https://x.com/".len());
        let link = format!("https://x.com/{padding}");
        assert_eq!(link.len(), 2048);
        assert!(validate_link(&link).is_ok());
    }

    #[test]
    fn instagram_check_applies_only_the_substring_rule() {
        assert!(validate_instagram_link("https://instagram.com/meu-perfil").is_ok());
        assert!(validate_instagram_link("https://www.instagram.com/p/abc/").is_ok());
        assert_eq!(
            validate_instagram_link("https://tiktok.com/@user"),
            Err(LinkError::NotInstagram)
        );
        // malformed input fails with the generic error, not the platform one
        assert_eq!(validate_instagram_link("instagram"), Err(LinkError::Invalid));
    }

    #[test]
    fn array_wrapped_bodies_are_unwrapped() {
        assert_eq!(
            first_payload(json!([{"status": "approved"}, {"status": "pending"}])),
            json!({"status": "approved"})
        );
        assert_eq!(first_payload(json!({"status": "x"})), json!({"status": "x"}));
        assert_eq!(first_payload(json!([])), Value::Null);
    }

    #[test]
    fn pix_response_requires_a_qr_image() {
        assert!(parse_pix_response(json!({})).is_none());
        assert!(parse_pix_response(json!({"qrCodeBase64": ""})).is_none());
        assert!(parse_pix_response(json!({"qrCodeCopyPaste": "000201"})).is_none());
        assert!(parse_pix_response(json!([{"qrCodeBase64": "iVBOR"}])).is_some());
    }

    #[test]
    fn pix_response_falls_back_to_qr_payload_for_copy_paste() {
        let payment = parse_pix_response(json!({"qrCodeBase64": "iVBOR"})).unwrap();
        assert_eq!(payment.copy_paste_code, "iVBOR");

        let payment =
            parse_pix_response(json!({"qrCodeBase64": "iVBOR", "qrCodeCopyPaste": "000201"}))
                .unwrap();
        assert_eq!(payment.copy_paste_code, "000201");
    }

    #[test]
    fn payment_id_is_taken_from_any_known_field() {
        let id = |body: Value| parse_pix_response(body).unwrap().payment_id;
        let qr = "iVBOR";
        assert_eq!(
            id(json!({"qrCodeBase64": qr, "paymentId": "abc"})),
            Some("abc".to_string())
        );
        assert_eq!(
            id(json!({"qrCodeBase64": qr, "pagamentoId": "def"})),
            Some("def".to_string())
        );
        // numeric ids arrive as JSON numbers
        assert_eq!(
            id(json!({"qrCodeBase64": qr, "id": 12345})),
            Some("12345".to_string())
        );
        assert_eq!(
            id(json!({"qrCodeBase64": qr, "externalReference": "ref-1"})),
            Some("ref-1".to_string())
        );
        assert_eq!(id(json!({"qrCodeBase64": qr})), None);
        // precedence: paymentId wins over id
        assert_eq!(
            id(json!({"qrCodeBase64": qr, "id": 7, "paymentId": "abc"})),
            Some("abc".to_string())
        );
    }

    #[test]
    fn approval_is_detected_across_field_names() {
        assert!(payment_approved(&json!({"status": "approved"})));
        assert!(payment_approved(&json!({"status": "APROVADO"})));
        assert!(payment_approved(&json!({"paymentStatus": "Approved"})));
        assert!(payment_approved(&json!({"situacao": "aprovado"})));
        assert!(payment_approved(&json!({"mensagem": "pagamento aprovado com sucesso"})));
        assert!(payment_approved(&json!({"approved": true})));
        assert!(payment_approved(&json!({"pago": true})));
    }

    #[test]
    fn non_approval_payloads_stay_pending() {
        assert!(!payment_approved(&json!({})));
        assert!(!payment_approved(&json!({"status": "pending"})));
        assert!(!payment_approved(&json!({"situacao": "aguardando"})));
        assert!(!payment_approved(&json!({"approved": false})));
        assert!(!payment_approved(&json!({"pago": false})));
        // "approved" as a string flag is a status text, not a bool
        assert!(!payment_approved(&json!({"approved": "false"})));
    }

    #[test]
    fn first_non_empty_status_field_wins() {
        // an empty status does not mask a later field
        assert!(payment_approved(&json!({"status": "", "situacao": "aprovado"})));
        // but a non-empty pending status does
        assert!(!payment_approved(&json!({"status": "pending", "mensagem": "aprovado"})));
        // boolean flags are still honored regardless of status text
        assert!(payment_approved(&json!({"status": "pending", "pago": true})));
    }

    #[test]
    fn qr_src_prepends_the_data_url_prefix_once() {
        assert_eq!(
            qr_image_src("iVBOR"),
            "data:image/png;base64,iVBOR".to_string()
        );
        assert_eq!(
            qr_image_src("data:image/png;base64,iVBOR"),
            "data:image/png;base64,iVBOR".to_string()
        );
    }

    #[test]
    fn countdown_formats_as_mm_ss() {
        assert_eq!(format_seconds(PIX_TTL_SECONDS), "15:00");
        assert_eq!(format_seconds(61), "01:01");
        assert_eq!(format_seconds(59), "00:59");
        assert_eq!(format_seconds(0), "00:00");
    }

    #[test]
    fn request_bodies_use_the_webhook_field_names() {
        let order = PixOrderRequest {
            url: "https://instagram.com/p/abc".into(),
            package_id: Some("5571-500"),
            servico: "Seguidores Instagram",
            valor: 8.90,
            service_id: "5571",
            quantidade: 500,
        };
        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["packageId"], "5571-500");
        assert_eq!(body["serviceId"], "5571");
        assert_eq!(body["valor"], 8.90);
        assert_eq!(body["quantidade"], 500);

        let order = PixOrderRequest {
            package_id: None,
            ..order
        };
        assert_eq!(serde_json::to_value(&order).unwrap()["packageId"], Value::Null);

        let check = StatusCheckRequest {
            payment_id: Some("pay-1".into()),
            qr_code_copy_paste: "000201".into(),
            service_id: "5571",
            servico: "Seguidores Instagram",
            url: "https://instagram.com/p/abc".into(),
        };
        let body = serde_json::to_value(&check).unwrap();
        assert_eq!(body["paymentId"], "pay-1");
        assert_eq!(body["qrCodeCopyPaste"], "000201");

        let trial = FreeOrderRequest {
            url: "https://instagram.com/perfil".into(),
            tipo: "curtidas",
            quantidade: 100,
            plataforma: Platform::Instagram,
        };
        let body = serde_json::to_value(&trial).unwrap();
        assert_eq!(body["plataforma"], "instagram");
        assert_eq!(body["quantidade"], 100);
    }
}
