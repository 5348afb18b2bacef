//! Common utilities for PDF generation: Typst escaping, Spanish date
//! formatting and the data-dictionary builder the context builders share.

use chrono::{Datelike, NaiveDate};
use std::path::Path;

/// Format a date the way the printed formats show it (e.g. "18 de agosto de 2025").
pub fn formato_fecha(fecha: NaiveDate) -> String {
    let meses = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];

    let dia = fecha.day();
    let mes = meses[(fecha.month0() as usize).min(meses.len() - 1)];
    let anio = fecha.year();

    format!("{dia} de {mes} de {anio}")
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Get the Typst templates directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Builder for a Typst dictionary literal. Every value renders as a string
/// field so the templates stay plain text substitution.
#[derive(Debug, Default)]
pub struct TypstDict {
    entradas: Vec<(String, String)>,
}

impl TypstDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quoted, escaped string entry.
    pub fn texto(mut self, clave: &str, valor: &str) -> Self {
        self.entradas
            .push((clave.to_string(), format!("\"{}\"", escape_typst_string(valor))));
        self
    }

    /// Date entry; `None` renders blank.
    pub fn fecha(mut self, clave: &str, valor: Option<NaiveDate>) -> Self {
        let texto = valor.map(formato_fecha).unwrap_or_default();
        self.entradas
            .push((clave.to_string(), format!("\"{}\"", escape_typst_string(&texto))));
        self
    }

    /// Integer entry rendered as text; `None` renders blank.
    pub fn numero(mut self, clave: &str, valor: Option<i64>) -> Self {
        let texto = valor.map(|v| v.to_string()).unwrap_or_default();
        self.entradas.push((clave.to_string(), format!("\"{texto}\"")));
        self
    }

    /// Raw Typst expression entry (arrays, nested dictionaries).
    pub fn crudo(mut self, clave: &str, valor: String) -> Self {
        self.entradas.push((clave.to_string(), valor));
        self
    }

    pub fn render(&self) -> String {
        let campos: Vec<String> = self
            .entradas
            .iter()
            .map(|(clave, valor)| format!("{clave}: {valor}"))
            .collect();
        format!("({},)", campos.join(", "))
    }
}

/// Typst array literal from already-rendered element expressions.
pub fn lista_typst(elementos: Vec<String>) -> String {
    format!("({},)", elementos.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fecha_en_espanol() {
        let fecha = NaiveDate::from_ymd_opt(2025, 8, 18).unwrap();
        assert_eq!(formato_fecha(fecha), "18 de agosto de 2025");
    }

    #[test]
    fn escape_comillas_y_saltos() {
        assert_eq!(escape_typst_string(r#"dijo "hola""#), r#"dijo \"hola\""#);
        assert_eq!(escape_typst_string("a\nb"), r"a\nb");
        assert_eq!(escape_typst_string(r"c:\ruta"), r"c:\\ruta");
    }

    #[test]
    fn dict_render_basico() {
        let dict = TypstDict::new()
            .texto("nombre", "Juan \"N\"")
            .numero("horas", Some(30))
            .numero("vacio", None)
            .fecha("fecha", NaiveDate::from_ymd_opt(2025, 1, 2));
        let rendered = dict.render();
        assert!(rendered.starts_with('('));
        assert!(rendered.contains(r#"nombre: "Juan \"N\"""#));
        assert!(rendered.contains(r#"horas: "30""#));
        assert!(rendered.contains(r#"vacio: """#));
        assert!(rendered.contains("2 de enero de 2025"));
    }

    #[test]
    fn lista_con_trailing_comma() {
        let lista = lista_typst(vec!["(a: \"1\",)".into(), "(a: \"2\",)".into()]);
        assert!(lista.ends_with(",)"));
    }
}
