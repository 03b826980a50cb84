mod session_user;
