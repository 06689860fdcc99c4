//! File contents of a generated unit

use crate::kind::UnitKind;

/// Shared-variables stylesheet, written into every unit
pub const VARIABLES_FILE: &str = "_variables.scss";

/// The four files that make up a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFile {
    Markup,
    Script,
    Style,
    Variables,
}

impl UnitFile {
    pub const ALL: [UnitFile; 4] = [
        UnitFile::Markup,
        UnitFile::Script,
        UnitFile::Style,
        UnitFile::Variables,
    ];

    /// File name inside the unit directory
    pub fn file_name(&self, name: &str) -> String {
        match self {
            UnitFile::Markup => format!("{}.vue", name),
            UnitFile::Script => format!("{}.ts", name),
            UnitFile::Style => format!("{}.scss", name),
            UnitFile::Variables => VARIABLES_FILE.to_string(),
        }
    }

    /// Render the file body for a unit
    pub fn render(&self, kind: UnitKind, name: &str) -> String {
        match self {
            UnitFile::Markup => format!(
                "<template>\n  <div class=\"{name}\"></div>\n</template>\n\n\
                 <script src=\"@/{kind}/{name}/{script}\" lang=\"ts\"></script>\n\n\
                 <style src=\"@/{kind}/{name}/{style}\" lang=\"scss\"></style>\n",
                name = name,
                kind = kind.dir_name(),
                script = UnitFile::Script.file_name(name),
                style = UnitFile::Style.file_name(name),
            ),
            UnitFile::Script => format!(
                "import {{ defineComponent }} from 'vue';\n\n\
                 export default defineComponent({{\n  name: '{}'\n}});\n",
                name
            ),
            UnitFile::Style => format!(".{} {{}}", name),
            // Placeholder; projects fill it in by hand
            UnitFile::Variables => String::new(),
        }
    }
}
