use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use crate::error::ApiError;

/// A file part of a multipart form.
pub struct UploadedFile {
    /// Final path component of the client-supplied name.
    pub file_name: String,
    pub bytes: Bytes,
}

/// Form fields from either `application/x-www-form-urlencoded` or
/// `multipart/form-data`. File parts are only possible with multipart.
///
/// Empty text values count as missing.
#[derive(Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormData {
    pub fn text(&self, name: &'static str) -> Result<String, ApiError> {
        self.fields
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or(ApiError::MissingField(name))
    }

    pub fn parse<T: FromStr>(&self, name: &'static str) -> Result<T, ApiError> {
        self.text(name)?
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidField(name))
    }

    /// Take ownership of a file part.
    pub fn file(&mut self, name: &'static str) -> Result<UploadedFile, ApiError> {
        self.files.remove(name).ok_or(ApiError::MissingField(name))
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadForm(e.body_text()))?;
            return Ok(Self {
                fields,
                files: HashMap::new(),
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadForm(e.body_text()))?;

        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadForm(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            let file_name = field.file_name().map(client_file_name);
            match file_name {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadForm(e.body_text()))?;
                    form.files.insert(name, UploadedFile { file_name, bytes });
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadForm(e.body_text()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }
}

/// Strip any directory part a client put in the file name, including
/// Windows-style separators.
pub fn client_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();
    match base {
        "" | "." | ".." => "upload".to_string(),
        name => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_file_name_keeps_only_basename() {
        assert_eq!(client_file_name("photo.png"), "photo.png");
        assert_eq!(client_file_name("../../etc/passwd"), "passwd");
        assert_eq!(client_file_name("C:\\Users\\me\\card.jpg"), "card.jpg");
        assert_eq!(client_file_name("dir/"), "upload");
        assert_eq!(client_file_name(".."), "upload");
    }

    #[test]
    fn empty_text_is_missing() {
        let mut form = FormData::default();
        form.fields.insert("email".into(), String::new());
        assert!(matches!(form.text("email"), Err(ApiError::MissingField("email"))));
        assert!(matches!(form.text("name"), Err(ApiError::MissingField("name"))));
    }

    #[test]
    fn parse_reports_invalid_field() {
        let mut form = FormData::default();
        form.fields.insert("percentage".into(), "ninety".into());
        assert!(matches!(
            form.parse::<i64>("percentage"),
            Err(ApiError::InvalidField("percentage"))
        ));

        form.fields.insert("percentage".into(), " 91 ".into());
        assert_eq!(form.parse::<i64>("percentage").unwrap(), 91);
    }
}
