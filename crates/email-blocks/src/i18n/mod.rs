//! Process-wide localization table.
//!
//! A read-only string mapping constructed once at first use; there is no
//! mutation API. [`lookup`] is pure and total: unregistered keys fall back
//! to the key itself, so display code never deals with a missing label.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// The built-in Spanish catalog, keyed by the English source strings.
const CATALOG: &[(&str, &str)] = &[
    // Block menu
    ("Add block", "Agregar bloque"),
    ("Add", "Agregar"),
    ("Heading", "Encabezado"),
    ("Text", "Texto"),
    ("Button", "Botón"),
    ("Image", "Imagen"),
    ("Avatar", "Avatar"),
    ("Divider", "Divisor"),
    ("Spacer", "Espaciador"),
    ("HTML", "HTML"),
    ("Columns", "Columnas"),
    ("Container", "Contenedor"),
    // Block actions
    ("Delete", "Eliminar"),
    ("Duplicate", "Duplicar"),
    ("Move up", "Mover arriba"),
    ("Move down", "Mover abajo"),
    ("Copy", "Copiar"),
    ("Paste", "Pegar"),
    // Layout
    ("Email layout", "Diseño de email"),
    ("Canvas", "Lienzo"),
    ("Canvas color", "Color del lienzo"),
    ("Content width", "Ancho del contenido"),
    ("Columns count", "Número de columnas"),
    ("Column", "Columna"),
    ("Gap", "Espacio"),
    // Template panel
    ("Template", "Plantilla"),
    ("JSON", "JSON"),
    ("Download JSON", "Descargar JSON"),
    ("Import JSON", "Importar JSON"),
    ("Copy JSON", "Copiar JSON"),
    ("Export", "Exportar"),
    ("Import", "Importar"),
];

lazy_static! {
    static ref TRANSLATIONS: HashMap<&'static str, &'static str> =
        CATALOG.iter().copied().collect();
}

/// Translates `key`, falling back to the key itself when unregistered.
/// Never fails.
pub fn lookup<'a>(key: &'a str) -> &'a str {
    TRANSLATIONS.get(key).copied().unwrap_or(key)
}
