//! Explicit schema definitions rendered to MariaDB DDL/DML.
//!
//! The table shape is declared as data (column name, semantic type,
//! constraints) and a thin persistence adapter consumes the rendered SQL,
//! instead of leaning on any ORM's mapping conventions.

/// Upper bound on filename length, mirrored by the `VARCHAR(256)` column.
pub const FILENAME_MAX_CHARS: u16 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Canonical hyphenated UUID text. Stored as `CHAR(36)` because
    /// MariaDB's native UUID type requires 10.7+.
    Uuid,
    VarChar(u16),
    /// `DATETIME(6)`: microsecond precision so read-back matches what was
    /// written.
    DateTime,
    LongBlob,
    Json,
}

impl ColumnType {
    fn sql(self) -> String {
        match self {
            ColumnType::Uuid => "CHAR(36)".to_string(),
            ColumnType::VarChar(len) => format!("VARCHAR({len})"),
            ColumnType::DateTime => "DATETIME(6)".to_string(),
            ColumnType::LongBlob => "LONGBLOB".to_string(),
            ColumnType::Json => "JSON".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub indexed: bool,
}

impl ColumnDef {
    pub fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: false,
            indexed: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }
}

/// One table: a name plus an ordered column list. Column order here fixes
/// the bind order used by the persistence adapter.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn primary_key(&self) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .map(|c| c.name)
    }

    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS `{}`", self.name)
    }

    pub fn create_table_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("`{}` {} NOT NULL", c.name, c.ty.sql());
                if c.primary_key {
                    def.push_str(" PRIMARY KEY");
                }
                def
            })
            .collect();

        for c in self.columns.iter().filter(|c| c.indexed) {
            parts.push(format!(
                "INDEX `idx_{}_{}` (`{}`)",
                self.name, c.name, c.name
            ));
        }

        format!("CREATE TABLE `{}` ({})", self.name, parts.join(", "))
    }

    pub fn insert_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(|c| format!("`{}`", c.name)).collect();
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO `{}` ({}) VALUES ({})",
            self.name,
            columns.join(", "),
            placeholders
        )
    }

    pub fn select_by_id_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(|c| format!("`{}`", c.name)).collect();
        let pk = self.primary_key().unwrap_or("id");
        format!(
            "SELECT {} FROM `{}` WHERE `{}` = ?",
            columns.join(", "),
            self.name,
            pk
        )
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM `{}`", self.name)
    }
}

/// The one table this crate manages.
pub fn uploaded_files() -> TableSchema {
    TableSchema {
        name: "uploaded_files",
        columns: vec![
            ColumnDef::new("id", ColumnType::Uuid).primary_key(),
            ColumnDef::new("filename", ColumnType::VarChar(FILENAME_MAX_CHARS)).indexed(),
            ColumnDef::new("uploaded", ColumnType::DateTime),
            ColumnDef::new("file_bytes", ColumnType::LongBlob),
            ColumnDef::new("json_data", ColumnType::Json),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_files_shape() {
        let schema = uploaded_files();
        assert_eq!(schema.name, "uploaded_files");
        assert_eq!(
            schema.column_names(),
            vec!["id", "filename", "uploaded", "file_bytes", "json_data"]
        );
        assert_eq!(schema.primary_key(), Some("id"));
    }

    #[test]
    fn test_create_table_sql() {
        let sql = uploaded_files().create_table_sql();
        assert_eq!(
            sql,
            "CREATE TABLE `uploaded_files` (\
             `id` CHAR(36) NOT NULL PRIMARY KEY, \
             `filename` VARCHAR(256) NOT NULL, \
             `uploaded` DATETIME(6) NOT NULL, \
             `file_bytes` LONGBLOB NOT NULL, \
             `json_data` JSON NOT NULL, \
             INDEX `idx_uploaded_files_filename` (`filename`))"
        );
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(
            uploaded_files().drop_table_sql(),
            "DROP TABLE IF EXISTS `uploaded_files`"
        );
    }

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            uploaded_files().insert_sql(),
            "INSERT INTO `uploaded_files` \
             (`id`, `filename`, `uploaded`, `file_bytes`, `json_data`) \
             VALUES (?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_select_by_id_sql() {
        assert_eq!(
            uploaded_files().select_by_id_sql(),
            "SELECT `id`, `filename`, `uploaded`, `file_bytes`, `json_data` \
             FROM `uploaded_files` WHERE `id` = ?"
        );
    }
}
