//! Minimal `multipart/form-data` encoder for single-file uploads.

use super::CsvUpload;

const CSV_CONTENT_TYPE: &str = "text/csv";

/// Encoded multipart payload plus the matching `Content-Type` header value.
#[derive(Clone, Debug)]
pub(crate) struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Encode one file under `field_name` with a random boundary.
pub(crate) fn encode_file(field_name: &str, upload: &CsvUpload) -> MultipartBody {
    let boundary = format!("----pulsepoint-{}", uuid::Uuid::new_v4().simple());
    encode_file_with_boundary(field_name, upload, &boundary)
}

fn encode_file_with_boundary(field_name: &str, upload: &CsvUpload, boundary: &str) -> MultipartBody {
    let file_name = sanitize_file_name(&upload.file_name);
    let mut bytes = Vec::with_capacity(upload.bytes.len() + 256);
    bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    bytes.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    bytes.extend_from_slice(format!("Content-Type: {CSV_CONTENT_TYPE}\r\n\r\n").as_bytes());
    bytes.extend_from_slice(&upload.bytes);
    bytes.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes,
    }
}

/// Quotes and line breaks would corrupt the part header.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|ch| !matches!(ch, '"' | '\r' | '\n' | '\\'))
        .collect();
    if cleaned.trim().is_empty() {
        "upload.csv".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, body: &str) -> CsvUpload {
        CsvUpload {
            file_name: name.to_string(),
            bytes: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn encodes_single_file_part() {
        let body = encode_file_with_boundary("file", &upload("patients.csv", "name,age\nA,54\n"), "XYZ");
        assert_eq!(body.content_type, "multipart/form-data; boundary=XYZ");
        let text = String::from_utf8(body.bytes).unwrap();
        assert_eq!(
            text,
            "--XYZ\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"patients.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             name,age\nA,54\n\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn random_boundaries_differ() {
        let first = encode_file("file", &upload("a.csv", "x"));
        let second = encode_file("file", &upload("a.csv", "x"));
        assert_ne!(first.content_type, second.content_type);
    }

    #[test]
    fn strips_header_breaking_characters_from_file_name() {
        assert_eq!(sanitize_file_name("we\"ird\r\n.csv"), "weird.csv");
        assert_eq!(sanitize_file_name("\"\""), "upload.csv");
    }
}
