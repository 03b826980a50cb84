mod integrity;
