//! Project fixtures shared by the test suites

#![allow(dead_code)]

use uxgraft::system::MockSystem;

pub const ROOT: &str = "/project";

/// 32 chars, alphanumeric with dashes
pub const LITERAL_KEY: &str = "ab12cd34-ef56-gh78-ij90-kl12mn34";

pub const KOTLIN_SETTINGS: &str = r#"pluginManagement {
    repositories {
        google()
        gradlePluginPortal()
    }
}
dependencyResolutionManagement {
    repositoriesMode.set(RepositoriesMode.FAIL_ON_PROJECT_REPOS)
    repositories {
        google()
        mavenCentral()
    }
}
rootProject.name = "Demo"
include(":app")
"#;

pub const KOTLIN_BUILD: &str = r#"plugins {
    id("com.android.application")
}

android {
    namespace = "com.example.demo"
    defaultConfig {
        applicationId = "com.example.demo"
        minSdk = 24
    }
}

dependencies {
    implementation("androidx.core:core-ktx:1.12.0")
}
"#;

pub const KOTLIN_APP: &str = r#"package com.example.demo

import android.app.Application

class DemoApp : Application() {
    override fun onCreate() {
        super.onCreate()
    }
}
"#;

pub const GROOVY_SETTINGS: &str = r#"pluginManagement {
    repositories {
        google()
    }
}
rootProject.name = 'Legacy'
include ':app'
"#;

pub const GROOVY_BUILD: &str = r#"plugins {
    id 'com.android.application'
}

android {
    namespace 'com.example.legacy'
    defaultConfig {
        minSdk 21
    }
}

dependencies {
    implementation 'androidx.appcompat:appcompat:1.6.1'
}
"#;

pub const JAVA_MAIN_ACTIVITY: &str = r#"package com.example.legacy;

import android.os.Bundle;
import androidx.appcompat.app.AppCompatActivity;

public class MainActivity extends AppCompatActivity {
    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.activity_main);
    }
}
"#;

pub const JAVA_SETTINGS_ACTIVITY: &str = r#"package com.example.legacy;

import androidx.appcompat.app.AppCompatActivity;

public class SettingsActivity extends AppCompatActivity {
    @Override
    protected void onCreate(android.os.Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
    }
}
"#;

pub const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android">
    <application android:label="Legacy">
        <activity android:name=".SettingsActivity" android:exported="false" />
        <activity
            android:name=".MainActivity"
            android:exported="true">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>
    </application>
</manifest>
"#;

pub const KOTLIN_APP_PATH: &str = "/project/app/src/main/java/com/example/demo/DemoApp.kt";
pub const JAVA_MAIN_PATH: &str = "/project/app/src/main/java/com/example/legacy/MainActivity.java";
pub const JAVA_SETTINGS_PATH: &str =
    "/project/app/src/main/java/com/example/legacy/SettingsActivity.java";

/// Kotlin DSL project with an Application subclass
pub fn kotlin_project() -> MockSystem {
    MockSystem::new()
        .with_file("/project/settings.gradle.kts", KOTLIN_SETTINGS.as_bytes())
        .unwrap()
        .with_file("/project/app/build.gradle.kts", KOTLIN_BUILD.as_bytes())
        .unwrap()
        .with_file(KOTLIN_APP_PATH, KOTLIN_APP.as_bytes())
        .unwrap()
}

/// Groovy project without an Application subclass, launched through MainActivity
pub fn groovy_project() -> MockSystem {
    MockSystem::new()
        .with_file("/project/settings.gradle", GROOVY_SETTINGS.as_bytes())
        .unwrap()
        .with_file("/project/app/build.gradle", GROOVY_BUILD.as_bytes())
        .unwrap()
        .with_file("/project/app/src/main/AndroidManifest.xml", MANIFEST.as_bytes())
        .unwrap()
        .with_file(JAVA_SETTINGS_PATH, JAVA_SETTINGS_ACTIVITY.as_bytes())
        .unwrap()
        .with_file(JAVA_MAIN_PATH, JAVA_MAIN_ACTIVITY.as_bytes())
        .unwrap()
}
