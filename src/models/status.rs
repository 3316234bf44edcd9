use std::fmt;

/// Declares a status enum whose known values map to snake_case strings and
/// whose unrecognized values are kept verbatim in `Unknown`.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value the upstream API sent that this build does not know.
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(other) => other,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                match status {
                    $name::Unknown(other) => other,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_enum! {
    /// Lifecycle of a project, from planning through document and phase
    /// generation to active development.
    ProjectStatus {
        Planning => "planning",
        GeneratingDocs => "generating_docs",
        GeneratingPhases => "generating_phases",
        GenerationComplete => "generation_complete",
        InProgress => "in_progress",
        Completed => "completed",
        Error => "error",
        Archived => "archived",
    }
}

status_enum! {
    FeatureStatus {
        Planned => "planned",
        InProgress => "in_progress",
        Done => "done",
        Dropped => "dropped",
    }
}

status_enum! {
    PhaseStatus {
        NotStarted => "not_started",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

status_enum! {
    /// `Generated` means the step content exists but work has not begun.
    StepStatus {
        Generated => "generated",
        NotStarted => "not_started",
        InProgress => "in_progress",
        Completed => "completed",
    }
}
