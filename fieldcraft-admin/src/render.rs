use crate::labels::Relationship;
use crate::view::{FieldRowView, RowActionKind, RowContext};
use fieldcraft_model::{FieldRecord, FieldResult};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Turns a resolved row into markup.
pub trait RowRenderer {
    fn render(&self, view: &FieldRowView) -> String;
}

/// Renders a field row as an HTML `<tr>`.
#[derive(Debug, Clone)]
pub struct HtmlRowRenderer {
    /// Image used as the drag handle.
    pub handle_icon: String,
}

impl Default for HtmlRowRenderer {
    fn default() -> Self {
        Self {
            handle_icon: "images/handle.gif".into(),
        }
    }
}

impl HtmlRowRenderer {
    fn label_cell(&self, view: &FieldRowView) -> String {
        let required_class = if view.required { "required" } else { "required hidden" };
        let badge = view
            .id_badge
            .as_deref()
            .map(|id| format!("<span class=\"manage-row-more\">[id: {}]</span>", text(id)))
            .unwrap_or_default();
        let actions = view
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let class = match a.kind {
                    RowActionKind::Edit => "edit",
                    RowActionKind::Duplicate => "duplicate",
                    RowActionKind::Delete => "trash manage-row-delete",
                };
                let sep = if i + 1 < view.actions.len() { " |" } else { "" };
                format!(
                    "<span class=\"{class}\"><a class=\"manage-row-{}\" title=\"{}\" href=\"{}\">{}</a>{sep}</span>",
                    kind_name(a.kind),
                    attr(a.title),
                    attr(a.href),
                    text(a.label),
                )
            })
            .collect::<Vec<_>>()
            .join("");

        format!(
            concat!(
                "<td class=\"manage-row-label\">",
                "<strong><a class=\"manage-row-edit row-label\" title=\"Edit this field\" href=\"#edit-field\">{label}</a> ",
                "<abbr title=\"required\" class=\"{required_class}\">*</abbr></strong>",
                "{badge}",
                "<div class=\"row-actions\">{actions}</div>",
                "<div class=\"manage-row-wrapper\" id=\"manage-field-{row}\">",
                "<input type=\"hidden\" name=\"field_data_json[{row}]\" value=\"{json}\" class=\"field_data\" />",
                "<input type=\"hidden\" name=\"field_data[{row}][id]\" value=\"{id}\" />",
                "</div>",
                "</td>"
            ),
            label = text(&view.label),
            required_class = required_class,
            badge = badge,
            actions = actions,
            row = attr(&view.row),
            json = attr(&view.field_json),
            id = attr(&view.id),
        )
    }

    fn type_cell(&self, view: &FieldRowView) -> String {
        let relationship = match &view.relationship {
            None => String::new(),
            Some(Relationship::Nested { label, group }) => format!(
                "<br /><span class=\"manage-field-type-desc\">&rsaquo; {} <small>({})</small></span>",
                text(label),
                text(group)
            ),
            Some(Relationship::Catalog(label) | Relationship::Fallback(label)) => format!(
                "<br /><span class=\"manage-field-type-desc\">&rsaquo; {}</span>",
                text(label)
            ),
        };
        format!(
            "<td class=\"manage-row-type\">{} <span class=\"manage-row-more\">[type: {}]</span>{relationship}</td>",
            text(&view.type_label),
            text(&view.type_code),
        )
    }
}

fn kind_name(kind: RowActionKind) -> &'static str {
    match kind {
        RowActionKind::Edit => "edit",
        RowActionKind::Duplicate => "duplicate",
        RowActionKind::Delete => "delete",
    }
}

impl RowRenderer for HtmlRowRenderer {
    fn render(&self, view: &FieldRowView) -> String {
        let row_kind = if view.template { "flexible-row" } else { "submittable-fields" };
        format!(
            concat!(
                "<tr id=\"row-{row}\" class=\"manage-row field-init field-{name} {row_kind}\" valign=\"top\" data-row=\"{row}\">",
                "<th scope=\"row\" class=\"check-field manage-sort\"><img src=\"{icon}\" alt=\"Move\" /></th>",
                "{label_cell}",
                "<td class=\"manage-row-name\"><a title=\"Edit this field\" class=\"manage-row-edit row-name\" href=\"#edit-field\">{name_text}</a></td>",
                "{type_cell}",
                "</tr>"
            ),
            row = attr(&view.row),
            name = attr(&view.name),
            row_kind = row_kind,
            icon = attr(&self.handle_icon),
            label_cell = self.label_cell(view),
            name_text = text(&view.name),
            type_cell = self.type_cell(view),
        )
    }
}

/// Resolve and render one field row with the stock HTML renderer.
pub fn render_row(field: &FieldRecord, ctx: &RowContext<'_>) -> FieldResult<String> {
    let view = FieldRowView::build(field, ctx)?;
    Ok(HtmlRowRenderer::default().render(&view))
}
