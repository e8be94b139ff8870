use ac_core::{Role, User};
use ac_mail::MailMessage;

pub const INVITATION_SUBJECT: &str = "Invitation à rejoindre AlumniConnect";

/// Invitation mail for a freshly onboarded identity.
///
/// Carries the temporary password in clear; the message must only ever go
/// to the transport.
pub fn invitation_message(user: &User, temporary_password: &str, frontend_url: &str) -> MailMessage {
    let role = match user.role {
        Role::SuperAdmin | Role::Admin => "administrateur",
        Role::Member => "membre",
    };
    let login_url = format!("{}/login", frontend_url.trim_end_matches('/'));

    let body = format!(
        "Bonjour {first_name},

Vous avez été invité à rejoindre la plateforme AlumniConnect en tant que {role}.

Voici vos identifiants de connexion temporaires :
Email : {email}
Mot de passe temporaire : {temporary_password}

Veuillez vous connecter à l'adresse suivante : {login_url}

Lors de votre première connexion, il vous sera demandé de définir un mot de passe définitif.

L'équipe AlumniConnect
",
        first_name = user.first_name,
        email = user.email,
    );

    MailMessage::new(user.email.clone(), INVITATION_SUBJECT, body)
}
