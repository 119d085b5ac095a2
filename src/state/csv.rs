//! Client-side CSV parsing for the admin import panel
//!
//! Deliberately naive: comma splitting with no quoting or escaping,
//! matching what the import panel promises. Rows missing any of the
//! required columns are dropped rather than reported.

/// One user row parsed from an import file. The OU stays a free-form
/// distinguished name because files may carry units outside the
/// selector's closed set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub ou: String,
    pub email: String,
    pub zip_code: String,
    pub description: String,
    pub telephone: String,
    pub job_title: String,
    pub department: String,
}

impl ImportedUser {
    fn set_column(&mut self, header: &str, value: &str) {
        match header {
            "username" => self.username = value.to_string(),
            "password" => self.password = value.to_string(),
            "firstname" => self.first_name = value.to_string(),
            "lastname" => self.last_name = value.to_string(),
            "fullname" => self.full_name = value.to_string(),
            "ou" => self.ou = value.to_string(),
            "email" => self.email = value.to_string(),
            "zipcode" => self.zip_code = value.to_string(),
            "description" => self.description = value.to_string(),
            "telephone" => self.telephone = value.to_string(),
            "jobtitle" => self.job_title = value.to_string(),
            "department" => self.department = value.to_string(),
            _ => {}
        }
    }
}

/// Parse an import file. Headers come from the first line,
/// case-insensitively; empty lines are skipped; a row must carry
/// username, firstname, and lastname to survive. Missing fullname
/// defaults to "first last", missing ou to `default_ou`.
pub fn parse_users_csv(text: &str, default_ou: &str) -> Vec<ImportedUser> {
    let mut rows = text.split('\n');
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .split(',')
        .map(|header| header.trim().to_lowercase())
        .collect();

    let mut users = Vec::new();
    for row in rows {
        if row.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = row.split(',').map(str::trim).collect();

        let mut user = ImportedUser::default();
        for (index, header) in headers.iter().enumerate() {
            if let Some(value) = values.get(index) {
                user.set_column(header, value);
            }
        }

        if user.username.is_empty() || user.first_name.is_empty() || user.last_name.is_empty() {
            continue;
        }
        if user.full_name.is_empty() {
            user.full_name = format!("{} {}", user.first_name, user.last_name);
        }
        if user.ou.is_empty() {
            user.ou = default_ou.to_string();
        }
        users.push(user);
    }
    users
}
