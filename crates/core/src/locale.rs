/// The language of the fixed status strings shown to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Spanish.
    Spanish,
}

impl Locale {
    /// Recorded as the last error when a message cannot be sent.
    pub fn send_failed(self) -> &'static str {
        match self {
            Locale::English => "message send failed",
            Locale::Spanish => "Error al enviar el mensaje",
        }
    }

    /// Recorded as the last error when a file cannot be uploaded.
    pub fn upload_failed(self) -> &'static str {
        match self {
            Locale::English => "file upload failed",
            Locale::Spanish => "Error al cargar el archivo",
        }
    }

    /// Appended as a bot message after a successful upload.
    pub fn upload_succeeded(self) -> &'static str {
        match self {
            Locale::English => "file uploaded successfully",
            Locale::Spanish => "Archivo subido con éxito",
        }
    }
}
