//! Per-field form control rendering.
//!
//! Picks a widget for each field from its rendering hint (input type if
//! present, SQL data type otherwise) and emits the JSX block for it. Plain
//! inputs use react-hook-form's `register`; third-party widgets go through a
//! `Controller`.

use adminforge_schema::FieldDescriptor;

use crate::react::base::FieldClass;

/// The control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    DatePicker,
    RichText,
    Dropzone,
    Phone,
    Select { multi: bool },
    Checkbox,
    Textarea,
    /// A native input with the given `type` attribute.
    Input { html_type: &'static str },
}

/// Picks the widget for a field.
///
/// Unknown hints fall back to a plain text input, matching the resolver's
/// posture that unrecognized descriptors never fail.
pub fn widget_for(field: &FieldDescriptor) -> Widget {
    match field.render_hint().as_str() {
        "date" => Widget::DatePicker,
        "rich-text" => Widget::RichText,
        "file" => Widget::Dropzone,
        "phone" => Widget::Phone,
        "select" => Widget::Select { multi: false },
        "multiselect" => Widget::Select { multi: true },
        "email" => Widget::Input { html_type: "email" },
        "password" => Widget::Input {
            html_type: "password",
        },
        "time" => Widget::Input { html_type: "time" },
        "timestamp" => Widget::Input {
            html_type: "datetime-local",
        },
        _ => match FieldClass::of_field(field) {
            FieldClass::Boolean => Widget::Checkbox,
            FieldClass::Number => Widget::Input { html_type: "number" },
            FieldClass::LongText | FieldClass::Document => Widget::Textarea,
            _ => Widget::Input { html_type: "text" },
        },
    }
}

/// The import line a widget needs, if it is backed by a package.
pub fn widget_import(widget: Widget) -> Option<&'static str> {
    match widget {
        Widget::DatePicker => Some("import DatePicker from \"react-datepicker\";"),
        Widget::RichText => Some("import ReactQuill from \"react-quill\";"),
        Widget::Dropzone => Some("import Dropzone from \"react-dropzone\";"),
        Widget::Phone => Some("import PhoneInput from \"react-phone-input-2\";"),
        Widget::Select { .. } => Some("import Select from \"react-select\";"),
        _ => None,
    }
}

/// Renders the JSX block for one field: label, control, error line.
pub fn render_field(field: &FieldDescriptor) -> String {
    let key = field.key();
    let label = field.label();
    let control = render_control(field, &key);

    if widget_for(field) == Widget::Checkbox {
        // Checkboxes read better with the label after the control.
        return format!(
            r#"      <div>
        <label htmlFor="{key}">
{control}
          {label}
        </label>
{error}
      </div>
"#,
            key = key,
            label = label,
            control = control,
            error = render_error(&key),
        );
    }

    format!(
        r#"      <div>
        <label htmlFor="{key}">{label}</label>
{control}
{error}
      </div>
"#,
        key = key,
        label = label,
        control = control,
        error = render_error(&key),
    )
}

fn render_error(key: &str) -> String {
    format!(
        r#"        {{errors.{key} && <p role="alert">{{errors.{key}.message}}</p>}}"#,
        key = key
    )
}

fn render_control(field: &FieldDescriptor, key: &str) -> String {
    match widget_for(field) {
        Widget::Input { html_type } => format!(
            r#"        <input id="{key}" type="{html_type}" {{...register("{key}")}} />"#,
        ),
        Widget::Textarea => format!(
            r#"        <textarea id="{key}" rows={{5}} {{...register("{key}")}} />"#,
        ),
        Widget::Checkbox => format!(
            r#"          <input id="{key}" type="checkbox" {{...register("{key}")}} />"#,
        ),
        Widget::DatePicker => format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <DatePicker
              id="{key}"
              selected={{field.value ? new Date(field.value) : null}}
              onChange={{(value) => field.onChange(value)}}
            />
          )}}
        />"#,
        ),
        Widget::RichText => format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <ReactQuill id="{key}" theme="snow" value={{field.value ?? ""}} onChange={{field.onChange}} />
          )}}
        />"#,
        ),
        Widget::Dropzone => format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <Dropzone onDrop={{(accepted) => field.onChange(accepted)}}>
              {{({{ getRootProps, getInputProps }}) => (
                <div {{...getRootProps()}}>
                  <input id="{key}" {{...getInputProps()}} />
                  <p>Drop files here or click to browse</p>
                </div>
              )}}
            </Dropzone>
          )}}
        />"#,
        ),
        Widget::Phone => format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <PhoneInput
              value={{field.value ?? ""}}
              onChange={{field.onChange}}
              inputProps={{{{ id: "{key}" }}}}
            />
          )}}
        />"#,
        ),
        Widget::Select { multi } => render_select(key, multi),
    }
}

fn render_select(key: &str, multi: bool) -> String {
    let options_const = options_const_name(key);

    if multi {
        format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <Select
              inputId="{key}"
              isMulti
              options={{{options_const}}}
              value={{{options_const}.filter((o) => field.value?.includes(o.value))}}
              onChange={{(selected) => field.onChange(selected.map((o) => o.value))}}
            />
          )}}
        />"#,
        )
    } else {
        format!(
            r#"        <Controller
          name="{key}"
          control={{control}}
          render={{({{ field }}) => (
            <Select
              inputId="{key}"
              options={{{options_const}}}
              value={{{options_const}.find((o) => o.value === field.value) ?? null}}
              onChange={{(selected) => field.onChange(selected?.value ?? "")}}
            />
          )}}
        />"#,
        )
    }
}

/// Name of the options constant emitted for a select field.
pub fn options_const_name(key: &str) -> String {
    format!("{key}Options")
}

/// Renders the options constant for a select field.
pub fn render_options_const(field: &FieldDescriptor) -> String {
    let mut code = format!("const {} = [\n", options_const_name(&field.key()));
    for option in &field.options {
        code.push_str(&format!(
            "  {{ value: \"{0}\", label: \"{0}\" }},\n",
            option
        ));
    }
    code.push_str("];\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with_input(name: &str, data_type: &str, input_type: &str) -> FieldDescriptor {
        let mut field = FieldDescriptor::new(name, data_type);
        field.input_type = Some(input_type.to_string());
        field
    }

    #[test]
    fn test_widget_selection() {
        assert_eq!(
            widget_for(&FieldDescriptor::new("published_at", "date")),
            Widget::DatePicker
        );
        assert_eq!(
            widget_for(&field_with_input("body", "text", "rich-text")),
            Widget::RichText
        );
        assert_eq!(
            widget_for(&FieldDescriptor::new("active", "boolean")),
            Widget::Checkbox
        );
        assert_eq!(
            widget_for(&FieldDescriptor::new("count", "integer")),
            Widget::Input { html_type: "number" }
        );
        assert_eq!(
            widget_for(&FieldDescriptor::new("body", "text")),
            Widget::Textarea
        );
        assert_eq!(
            widget_for(&FieldDescriptor::new("mystery", "hyperloglog")),
            Widget::Input { html_type: "text" }
        );
    }

    #[test]
    fn test_package_backed_widgets_have_imports() {
        assert!(widget_import(Widget::DatePicker).is_some());
        assert!(widget_import(Widget::Select { multi: true }).is_some());
        assert!(widget_import(Widget::Checkbox).is_none());
        assert!(widget_import(Widget::Input { html_type: "text" }).is_none());
    }

    #[test]
    fn test_render_text_input() {
        let code = render_field(&FieldDescriptor::new("title", "varchar"));
        assert!(code.contains(r#"<label htmlFor="title">Title</label>"#));
        assert!(code.contains(r#"<input id="title" type="text" {...register("title")} />"#));
        assert!(code.contains("errors.title"));
    }

    #[test]
    fn test_render_date_picker_uses_controller() {
        let code = render_field(&FieldDescriptor::new("published_at", "date"));
        assert!(code.contains(r#"name="publishedAt""#));
        assert!(code.contains("<DatePicker"));
        assert!(code.contains("control={control}"));
    }

    #[test]
    fn test_render_select_options() {
        let mut field = field_with_input("category", "varchar", "select");
        field.options = vec!["news".to_string(), "opinion".to_string()];

        let consts = render_options_const(&field);
        assert!(consts.contains("const categoryOptions = ["));
        assert!(consts.contains(r#"{ value: "news", label: "news" },"#));

        let code = render_field(&field);
        assert!(code.contains("options={categoryOptions}"));
        assert!(!code.contains("isMulti"));
    }

    #[test]
    fn test_render_multiselect() {
        let field = field_with_input("tags", "varchar", "multiselect");
        let code = render_field(&field);
        assert!(code.contains("isMulti"));
        assert!(code.contains("selected.map((o) => o.value)"));
    }

    #[test]
    fn test_checkbox_wraps_label_around_control() {
        let code = render_field(&FieldDescriptor::new("published", "boolean"));
        let label_pos = code.find("<label").unwrap();
        let input_pos = code.find("type=\"checkbox\"").unwrap();
        assert!(label_pos < input_pos);
        assert!(code.contains("Published"));
    }
}
