mod auth_user;
