//! HTML page of an evaluation report.
//! The page is self-contained except for the chart images, which are
//! referenced by their file names next to the page.

use crate::report::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
}

const CSS: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto;color:#000}\
h2{color:#091b2c}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:4px 8px}\
td.n{text-align:right}\
figure{margin:1.5em 0}\
img{max-width:100%}";

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Html {
        Html {
            buf: String::with_capacity(16 * 1024),
        }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn comment_section(w: &mut Html, heading: &str, block: &CommentBlock) {
    if block.is_empty() {
        return;
    }
    w.push(format!("<section><h2>{}</h2><ul>", esc(heading)));
    for entry in block.entries() {
        w.push(format!("<li>{}</li>", esc(entry)));
    }
    w.push("</ul></section>");
}

pub fn render_html(input: &ReportInput, opts: &HtmlOptions) -> String {
    let mut w = Html::new();
    w.push("<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">");
    w.push(format!("<title>{}</title>", esc(&opts.title)));
    w.push(format!("<style>{}</style></head><body>", CSS));
    w.push(format!("<h1>{}</h1>", esc(&opts.title)));

    w.push("<section><h2>Información general de la evaluación</h2><ul>");
    w.push(format!(
        "<li><strong>NRC:</strong> {}</li>",
        esc(input.identifier.as_str())
    ));
    w.push(format!(
        "<li><strong>Número de personas que respondieron la encuesta:</strong> {}</li>",
        input.respondents
    ));
    w.push("</ul></section>");

    w.push("<section><h2>Tabla de resultados</h2><table><thead><tr><th></th><th>pregunta</th>");
    for category in ResponseCategory::ALL.iter() {
        w.push(format!("<th>{}</th>", category.label()));
    }
    w.push("</tr></thead><tbody>");
    for (idx, row) in input.rows.iter().enumerate() {
        w.push(format!(
            "<tr><td class=\"n\">{}</td><td>{}</td>",
            idx,
            esc(&row.question)
        ));
        for category in ResponseCategory::ALL.iter() {
            w.push(format!("<td class=\"n\">{}</td>", row.count(*category)));
        }
        w.push("</tr>");
    }
    w.push("</tbody></table></section>");

    w.push("<section><h2>Gráficas de cada pregunta</h2>");
    for (idx, row) in input.rows.iter().enumerate() {
        let file_name = esc(&chart_file_name(idx, &row.question));
        w.push("<figure>");
        w.push(format!("<figcaption>{}</figcaption>", esc(&row.question)));
        w.push(format!(
            "<img src=\"{}\" alt=\"{}\">",
            file_name,
            esc(&row.question)
        ));
        w.push(format!(
            "<p><a href=\"{0}\" download=\"{0}\">Descargar gráfica</a></p>",
            file_name
        ));
        w.push("</figure>");
    }
    w.push("</section>");

    comment_section(&mut w, "Comentarios", &input.comments);
    comment_section(&mut w, "Comentarios Música/Vitalizador", &input.comments_music);

    w.push("</body></html>\n");
    w.finish()
}
