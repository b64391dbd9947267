//! Terminal preview templates.
//!
//! Widths and padding are computed in Rust; the templates only pick styles.

pub const HOME_PREVIEW_TEMPLATE: &str = r#"{{ title | style("title") }}
{% if section_zero %}{{ section_zero | style("zero") }}
{% endif %}{% if overall %}{{ overall | style(overall_style) }}
{% endif %}
{% if empty %}{{ "No sections to show." | style("dim") }}
{% endif %}{% for row in rows %}{% for cell in row.cells %}{{ cell.label | style(cell.style) }}{% endfor %}
{% for cell in row.cells %}{{ cell.progress | style(cell.progress_style) }}{% endfor %}
{% endfor %}"#;

pub const SECTION_PREVIEW_TEMPLATE: &str = r#"{% if status == "found" %}{{ title | style("title") }}
{% if availability %}{{ availability | style("dim") }}
{% endif %}{% if progress %}{{ progress | style(progress_style) }}
{% endif %}
{% if tabs %}{% for tab in tabs %}{{ tab.label | style(tab.style) }} {% endfor %}
{% for tab in tabs %}
{{ tab.title | style("title") }}
{% for module in tab.modules %}  - {{ module }}
{% else %}  {{ "(empty)" | style("dim") }}
{% endfor %}{% endfor %}{% else %}{{ "This section has no content." | style("dim") }}
{% endif %}{% elif status == "hidden" %}{{ title | style("card_restricted") }}
{% if availability %}{{ availability | style("dim") }}
{% endif %}{% else %}{{ message | style("danger") }}
{% endif %}"#;
