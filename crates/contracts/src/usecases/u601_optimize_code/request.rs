/// Multipart field names understood by the optimization endpoint
pub const FIELD_FILE: &str = "file";
pub const FIELD_CODE: &str = "code";
pub const FIELD_USER_PROMPT: &str = "user_prompt";
pub const FIELD_SYSTEM_PROMPT: &str = "system_prompt";

/// A file picked in the upload control, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// MIME type reported by the browser (may be empty for `.tsx`)
    pub media_type: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }
}

/// Exactly one source of code per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeSource {
    File(SelectedFile),
    Code(String),
}

/// Запрос на оптимизацию кода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub source: CodeSource,
    pub user_prompt: Option<String>,
    pub system_prompt: Option<String>,
}

/// Value of a single multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue<'a> {
    Text(&'a str),
    File(&'a SelectedFile),
}

/// One named part of the multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField<'a> {
    pub name: &'static str,
    pub value: FormValue<'a>,
}

impl OptimizeRequest {
    /// Builds a request, dropping prompts that are blank after trimming.
    ///
    /// Non-blank prompts are kept as typed.
    pub fn new(source: CodeSource, user_prompt: &str, system_prompt: &str) -> Self {
        Self {
            source,
            user_prompt: non_blank(user_prompt),
            system_prompt: non_blank(system_prompt),
        }
    }

    /// Parts of the multipart body in the order they are appended
    pub fn form_fields(&self) -> Vec<FormField<'_>> {
        let mut fields = Vec::with_capacity(3);
        match &self.source {
            CodeSource::File(file) => fields.push(FormField {
                name: FIELD_FILE,
                value: FormValue::File(file),
            }),
            CodeSource::Code(code) => fields.push(FormField {
                name: FIELD_CODE,
                value: FormValue::Text(code),
            }),
        }
        if let Some(prompt) = non_blank_ref(self.user_prompt.as_deref()) {
            fields.push(FormField {
                name: FIELD_USER_PROMPT,
                value: FormValue::Text(prompt),
            });
        }
        if let Some(prompt) = non_blank_ref(self.system_prompt.as_deref()) {
            fields.push(FormField {
                name: FIELD_SYSTEM_PROMPT,
                value: FormValue::Text(prompt),
            });
        }
        fields
    }
}

fn non_blank(value: &str) -> Option<String> {
    non_blank_ref(Some(value)).map(str::to_string)
}

fn non_blank_ref(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(request: &OptimizeRequest) -> Vec<&'static str> {
        request.form_fields().iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_code_only_payload() {
        let request = OptimizeRequest::new(CodeSource::Code("const a = 1;".into()), "", "");
        assert_eq!(
            request.form_fields(),
            vec![FormField {
                name: FIELD_CODE,
                value: FormValue::Text("const a = 1;"),
            }]
        );
    }

    #[test]
    fn test_file_payload_has_no_code_field() {
        let file = SelectedFile::new("Test.tsx", "text/tsx", b"export default function Test() {}".to_vec());
        let request = OptimizeRequest::new(CodeSource::File(file.clone()), "", "");
        let fields = request.form_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, FIELD_FILE);
        assert_eq!(fields[0].value, FormValue::File(&file));
    }

    #[test]
    fn test_prompts_included_when_present() {
        let request = OptimizeRequest::new(CodeSource::Code("code".into()), "user", "system");
        assert_eq!(
            names(&request),
            vec![FIELD_CODE, FIELD_USER_PROMPT, FIELD_SYSTEM_PROMPT]
        );
    }

    #[test]
    fn test_blank_prompts_omitted() {
        let request = OptimizeRequest::new(CodeSource::Code("code".into()), "   ", "\n\t");
        assert_eq!(request.user_prompt, None);
        assert_eq!(request.system_prompt, None);
        assert_eq!(names(&request), vec![FIELD_CODE]);
    }

    #[test]
    fn test_prompt_sent_untrimmed() {
        let request = OptimizeRequest::new(CodeSource::Code("code".into()), "  keep spaces ", "");
        let fields = request.form_fields();
        assert_eq!(fields[1].value, FormValue::Text("  keep spaces "));
    }

    #[test]
    fn test_blank_prompt_set_directly_is_still_omitted() {
        let request = OptimizeRequest {
            source: CodeSource::Code("code".into()),
            user_prompt: Some("  ".into()),
            system_prompt: None,
        };
        assert_eq!(names(&request), vec![FIELD_CODE]);
    }
}
